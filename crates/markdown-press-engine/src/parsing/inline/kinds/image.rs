/// `![alt](url)`: the link shape behind a bang.
///
/// A bang directly before `[` also stops that bracket from opening a link.
pub struct Image;

impl Image {
    pub const BANG: u8 = b'!';
}
