use std::borrow::Cow;

use crate::util::split_extension;

/// Strip the content-root prefix from an archive path.
///
/// Returns `None` for paths outside the content root.
pub fn strip_content_root<'a>(path: &'a str, root: &str) -> Option<&'a str> {
    path.strip_prefix(root)
}

/// Lowercase the extension of image files.
///
/// Only the extension changes; directory and base name are kept as-is.
/// Paths with a non-image extension are returned unchanged, as are paths
/// whose image extension is already lowercase.
///
/// # Examples
///
/// ```
/// use epubzip::transform::normalize_image_extension;
///
/// let images = ["png".to_string(), "jpg".to_string()];
/// assert_eq!(normalize_image_extension("img/Cover.PNG", &images), "img/Cover.png");
/// assert_eq!(normalize_image_extension("style/Main.CSS", &images), "style/Main.CSS");
/// ```
pub fn normalize_image_extension<'a>(path: &'a str, image_extensions: &[String]) -> Cow<'a, str> {
    let (stem, Some(ext)) = split_extension(path) else {
        return Cow::Borrowed(path);
    };

    let is_image = image_extensions
        .iter()
        .any(|image| image.eq_ignore_ascii_case(ext));
    if !is_image || !ext.bytes().any(|b| b.is_ascii_uppercase()) {
        return Cow::Borrowed(path);
    }

    Cow::Owned(format!("{stem}.{}", ext.to_ascii_lowercase()))
}
