/// Backslash escapes: `\*` is a literal star that never acts as a marker.
pub struct Backslash;

impl Backslash {
    pub const ESCAPE: u8 = b'\\';
    pub const ESCAPABLE: &'static [u8] = b"\\`*[]()|";

    pub fn escapes(b: u8) -> bool {
        Self::ESCAPABLE.contains(&b)
    }
}
