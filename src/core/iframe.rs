use crate::domain::ports::{DocumentSink, FrameRegistry};

pub const IFRAME_NOT_FOUND: &str = "Could not add content to iframe: no iframe found.";

/// iframe 可以直接給文件，也可以給 id 由 registry 查找
pub enum IframeRef<'a> {
    Element(&'a mut dyn DocumentSink),
    Id(&'a str),
}

impl<'a> From<&'a str> for IframeRef<'a> {
    fn from(id: &'a str) -> Self {
        IframeRef::Id(id)
    }
}

impl<'a> From<&'a mut dyn DocumentSink> for IframeRef<'a> {
    fn from(doc: &'a mut dyn DocumentSink) -> Self {
        IframeRef::Element(doc)
    }
}

/// Replaces the content of an iframe's document with `content`.
///
/// An unknown iframe is logged and ignored. Write failures are logged too;
/// nothing is returned to the caller.
pub fn add_content_to_iframe<R: FrameRegistry + ?Sized>(
    frames: &mut R,
    iframe: IframeRef<'_>,
    content: &str,
) {
    let written = match iframe {
        IframeRef::Element(doc) => doc.write(content),
        IframeRef::Id(id) => match frames.frame_by_id(id) {
            Some(doc) => doc.write(content),
            None => {
                tracing::error!("{} (id: {})", IFRAME_NOT_FOUND, id);
                return;
            }
        },
    };

    if let Err(e) = written {
        tracing::error!("Could not add content to iframe: {}", e);
    }
}

pub fn add_content_to_iframe_with_id<R: FrameRegistry + ?Sized>(
    frames: &mut R,
    iframe_id: &str,
    content: &str,
) {
    add_content_to_iframe(frames, IframeRef::Id(iframe_id), content);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::frames::{HtmlDocument, InMemoryFrames};

    #[test]
    fn test_write_by_id_replaces_content() {
        let mut frames = InMemoryFrames::new();
        frames.insert("preview", HtmlDocument::with_content("<p>old</p>\n"));

        add_content_to_iframe_with_id(&mut frames, "preview", "<p>new</p>");

        let doc = frames.get("preview").unwrap();
        assert_eq!(doc.content(), "<p>new</p>\n");
        assert!(doc.is_closed());
    }

    #[test]
    fn test_write_to_element() {
        let mut frames = InMemoryFrames::new();
        let mut doc = HtmlDocument::default();

        add_content_to_iframe(&mut frames, IframeRef::Element(&mut doc), "<b>hi</b>");

        assert_eq!(doc.content(), "<b>hi</b>\n");
    }

    #[test]
    fn test_unknown_id_is_a_no_op() {
        let mut frames = InMemoryFrames::new();
        frames.insert("preview", HtmlDocument::with_content("keep"));

        add_content_to_iframe(&mut frames, "missing".into(), "<p>lost</p>");

        assert_eq!(frames.get("preview").unwrap().content(), "keep");
        assert!(frames.get("missing").is_none());
    }
}
