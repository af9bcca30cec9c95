//! Embedded `data:` image discovery.

use regex::Regex;
use std::ops::Range;
use std::sync::LazyLock;

static EMBEDDED_IMAGE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"!\[(.*?)\]\((data:image/([a-zA-Z0-9.+-]+);base64,([^)]+))\)")
        .expect("Invalid embedded image regex")
});

/// An inline base64 image found in a Markdown document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbeddedImage {
    /// 1-based position in the document.
    pub index: usize,
    pub alt: String,
    /// Mime subtype, e.g. `png`, `jpeg`, `svg+xml`.
    pub subtype: String,
    pub data_base64: String,
    /// Byte range of the whole `![..](..)` reference.
    pub span: Range<usize>,
}

impl EmbeddedImage {
    pub fn extension(&self) -> &str {
        extension_for(&self.subtype)
    }

    /// Alt text with `image_<n>` substituted for an empty one.
    pub fn display_alt(&self) -> String {
        if self.alt.is_empty() {
            format!("image_{}", self.index)
        } else {
            self.alt.clone()
        }
    }
}

/// File extension for a mime subtype.
pub fn extension_for(subtype: &str) -> &str {
    match subtype {
        "jpeg" => "jpg",
        "svg+xml" => "svg",
        other => other,
    }
}

/// All embedded images in document order.
pub fn find_embedded_images(markdown: &str) -> Vec<EmbeddedImage> {
    EMBEDDED_IMAGE_REGEX
        .captures_iter(markdown)
        .enumerate()
        .filter_map(|(i, caps)| {
            let whole = caps.get(0)?;
            Some(EmbeddedImage {
                index: i + 1,
                alt: caps.get(1)?.as_str().to_string(),
                subtype: caps.get(3)?.as_str().to_string(),
                data_base64: caps.get(4)?.as_str().to_string(),
                span: whole.range(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_images_in_order() {
        let md = "![一杯茶](data:image/png;base64,AAAA)\n\ntext\n\n![](data:image/jpeg;base64,BBBB)";
        let images = find_embedded_images(md);
        assert_eq!(images.len(), 2);
        assert_eq!(images[0].index, 1);
        assert_eq!(images[0].alt, "一杯茶");
        assert_eq!(images[0].data_base64, "AAAA");
        assert_eq!(&md[images[0].span.clone()], "![一杯茶](data:image/png;base64,AAAA)");
        assert_eq!(images[1].extension(), "jpg");
        assert_eq!(images[1].display_alt(), "image_2");
    }

    #[test]
    fn svg_subtype_maps_to_svg() {
        let images = find_embedded_images("![x](data:image/svg+xml;base64,PHN2Zz4=)");
        assert_eq!(images[0].subtype, "svg+xml");
        assert_eq!(images[0].extension(), "svg");
    }

    #[test]
    fn ignores_linked_images() {
        assert!(find_embedded_images("![logo](images/logo.png)").is_empty());
    }
}
