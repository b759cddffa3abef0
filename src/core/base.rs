use crate::core::{duplicates, entity, iframe, objects, text, url_params};
use crate::domain::model::{Mapping, NameRules};
use crate::domain::ports::{FrameRegistry, WarningSink};
use serde_json::Value;
use std::collections::BTreeMap;

/// 控制器共用的輔助函式集合，持有名稱規則與警告接收者
pub struct BaseHelpers<W: WarningSink> {
    rules: NameRules,
    warnings: W,
}

impl<W: WarningSink> BaseHelpers<W> {
    pub fn new(rules: NameRules, warnings: W) -> Self {
        Self { rules, warnings }
    }

    pub fn rules(&self) -> &NameRules {
        &self.rules
    }

    pub fn warnings(&self) -> &W {
        &self.warnings
    }

    pub fn warnings_mut(&mut self) -> &mut W {
        &mut self.warnings
    }

    pub fn into_warnings(self) -> W {
        self.warnings
    }

    pub fn get_url_params(&self, url: &str) -> BTreeMap<String, String> {
        url_params::get_url_params(url)
    }

    pub fn is_empty(&self, value: &Value) -> bool {
        objects::is_empty(value)
    }

    pub fn normalize_whitespace(&self, input: &str) -> String {
        text::normalize_whitespace(input)
    }

    pub fn is_valid_entity_name(&mut self, input: &str, show_warnings: bool) -> bool {
        entity::is_valid_entity_name(input, show_warnings, &self.rules, &mut self.warnings)
    }

    pub fn is_duplicate_input(
        &self,
        mapping: &Mapping,
        field: &str,
        current_key: &str,
        new_value: &Value,
    ) -> bool {
        duplicates::is_duplicate_input(mapping, field, current_key, new_value)
    }

    pub fn is_duplicate_array_input(
        &mut self,
        entries: &[Value],
        field: &str,
        current_index: Option<usize>,
        new_value: &Value,
    ) -> bool {
        duplicates::is_duplicate_array_input(
            entries,
            field,
            current_index,
            new_value,
            &mut self.warnings,
        )
    }

    pub fn clone_object<T: Clone>(&self, value: &T) -> T {
        objects::clone_object(value)
    }

    pub fn neat_join(&self, first: &str, second: &str) -> String {
        text::neat_join(first, second)
    }

    pub fn add_content_to_iframe<R: FrameRegistry + ?Sized>(
        &self,
        frames: &mut R,
        target: iframe::IframeRef<'_>,
        content: &str,
    ) {
        iframe::add_content_to_iframe(frames, target, content);
    }

    pub fn add_content_to_iframe_with_id<R: FrameRegistry + ?Sized>(
        &self,
        frames: &mut R,
        iframe_id: &str,
        content: &str,
    ) {
        iframe::add_content_to_iframe_with_id(frames, iframe_id, content);
    }
}
