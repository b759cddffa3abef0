use crate::domain::ports::{DocumentSink, FrameRegistry};
use crate::utils::error::{BaseError, Result};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// 記憶體中的 HTML 文件
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HtmlDocument {
    content: String,
    open: bool,
}

impl HtmlDocument {
    pub fn with_content(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            open: false,
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn is_closed(&self) -> bool {
        !self.open
    }
}

impl DocumentSink for HtmlDocument {
    fn open(&mut self) -> Result<()> {
        self.content.clear();
        self.open = true;
        Ok(())
    }

    fn writeln(&mut self, content: &str) -> Result<()> {
        // 寫入已關閉的文件會先隱含地重新開啟
        if !self.open {
            self.open()?;
        }
        self.content.push_str(content);
        self.content.push('\n');
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        self.open = false;
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct InMemoryFrames {
    frames: HashMap<String, HtmlDocument>,
}

impl InMemoryFrames {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: impl Into<String>, doc: HtmlDocument) {
        self.frames.insert(id.into(), doc);
    }

    pub fn get(&self, id: &str) -> Option<&HtmlDocument> {
        self.frames.get(id)
    }
}

impl FrameRegistry for InMemoryFrames {
    fn frame_by_id(&mut self, id: &str) -> Option<&mut dyn DocumentSink> {
        self.frames
            .get_mut(id)
            .map(|doc| doc as &mut dyn DocumentSink)
    }
}

/// A frame stored as `<dir>/<id>.html`. Content is buffered and written to
/// disk on `close`.
#[derive(Debug)]
pub struct FileDocument {
    path: PathBuf,
    buffer: HtmlDocument,
}

impl FileDocument {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            buffer: HtmlDocument::default(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DocumentSink for FileDocument {
    fn open(&mut self) -> Result<()> {
        self.buffer.open()
    }

    fn writeln(&mut self, content: &str) -> Result<()> {
        self.buffer.writeln(content)
    }

    fn close(&mut self) -> Result<()> {
        self.buffer.close()?;
        fs::write(&self.path, self.buffer.content()).map_err(|e| BaseError::DocumentError {
            message: format!("{}: {}", self.path.display(), e),
        })
    }
}

/// Frames backed by a directory. An id resolves only when its file exists.
#[derive(Debug)]
pub struct FileFrames {
    dir: PathBuf,
    docs: HashMap<String, FileDocument>,
}

impl FileFrames {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            docs: HashMap::new(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, id: &str) -> Option<PathBuf> {
        // id 必須是單純的檔名，不能跳出目錄
        let file_name = format!("{}.html", id);
        if id.is_empty() || Path::new(&file_name).file_name()?.to_str()? != file_name {
            return None;
        }
        Some(self.dir.join(file_name))
    }
}

impl FrameRegistry for FileFrames {
    fn frame_by_id(&mut self, id: &str) -> Option<&mut dyn DocumentSink> {
        let path = self.path_for(id)?;
        if !path.is_file() {
            tracing::debug!("No frame file at {}", path.display());
            return None;
        }
        let doc = self
            .docs
            .entry(id.to_string())
            .or_insert_with(|| FileDocument::new(path));
        Some(doc as &mut dyn DocumentSink)
    }
}
