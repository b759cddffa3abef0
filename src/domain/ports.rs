use crate::utils::error::Result;

/// 接收非致命驗證訊息的對象（例如頁面上方的警告列）
pub trait WarningSink {
    fn add_warning(&mut self, message: &str);
}

impl<W: WarningSink + ?Sized> WarningSink for &mut W {
    fn add_warning(&mut self, message: &str) {
        (**self).add_warning(message);
    }
}

/// A writable document, such as the one behind an iframe.
pub trait DocumentSink {
    fn open(&mut self) -> Result<()>;
    fn writeln(&mut self, content: &str) -> Result<()>;
    fn close(&mut self) -> Result<()>;

    /// Replaces the document's content with `content`.
    fn write(&mut self, content: &str) -> Result<()> {
        self.open()?;
        self.writeln(content)?;
        self.close()
    }
}

/// 以 id 尋找 iframe 的文件
pub trait FrameRegistry {
    fn frame_by_id(&mut self, id: &str) -> Option<&mut dyn DocumentSink>;
}
