/// Number of distinct face images; each appears on the board twice.
pub const FACE_COUNT: usize = 8;

/// Identifies one of the loaded images. `0` is the shared hidden image,
/// `1..=FACE_COUNT` are the faces.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ImageId(pub u8);

impl ImageId {
    pub const HIDDEN: ImageId = ImageId(0);

    pub fn face(index: usize) -> Self {
        assert!(
            (1..=FACE_COUNT).contains(&index),
            "face index must be in 1..={}",
            FACE_COUNT
        );
        ImageId(index as u8)
    }

    pub fn faces() -> impl Iterator<Item = ImageId> {
        (1..=FACE_COUNT).map(ImageId::face)
    }

    /// Every image the game needs, hidden image first.
    pub fn all() -> impl Iterator<Item = ImageId> {
        std::iter::once(ImageId::HIDDEN).chain(ImageId::faces())
    }

    #[cfg(test)]
    pub fn is_hidden(&self) -> bool {
        *self == ImageId::HIDDEN
    }

    pub fn file_name(&self) -> String {
        format!("image{}.bmp", self.0)
    }
}

impl std::fmt::Display for ImageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.file_name())
    }
}

impl std::fmt::Debug for ImageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "img{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_file_names() {
        let names: Vec<String> = ImageId::all().map(|id| id.file_name()).collect();
        assert_eq!(names.len(), FACE_COUNT + 1);
        assert_eq!(names[0], "image0.bmp");
        assert_eq!(names[8], "image8.bmp");
        assert!(ImageId::faces().all(|id| !id.is_hidden()));
    }

    #[test]
    #[should_panic]
    fn test_face_zero_is_rejected() {
        ImageId::face(0);
    }
}
