//! Store loading, saving, and record operations.

use super::TemplateStore;
use crate::error::{NoticeError, Result};
use crate::fs::atomic_write_file;
use crate::notification::NotificationTemplate;
use std::path::Path;

/// Partial update for an existing template. `None` keeps the current value.
#[derive(Debug, Clone, Default)]
pub struct TemplatePatch {
    pub name: Option<String>,
    pub subject: Option<String>,
    pub content: Option<String>,
}

impl TemplatePatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.subject.is_none() && self.content.is_none()
    }
}

impl TemplateStore {
    /// Load the store from a YAML file. A missing file is an empty store.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            NoticeError::IoError(format!(
                "failed to read template store '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse a store from YAML, rejecting invalid records and duplicate ids.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let store: TemplateStore = serde_yaml::from_str(yaml).map_err(|e| {
            NoticeError::UserError(format!("failed to parse template store YAML: {}", e))
        })?;

        for (i, template) in store.templates.iter().enumerate() {
            template.validate()?;
            if store.templates[..i].iter().any(|t| t.id == template.id) {
                return Err(NoticeError::ValidationError(format!(
                    "template store contains duplicate id '{}'",
                    template.id
                )));
            }
        }

        Ok(store)
    }

    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            NoticeError::UserError(format!("failed to serialize template store: {}", e))
        })
    }

    /// Write the store atomically.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        atomic_write_file(path, &self.to_yaml()?)
    }

    pub fn list(&self) -> &[NotificationTemplate] {
        &self.templates
    }

    pub fn find(&self, id: &str) -> Option<&NotificationTemplate> {
        self.templates.iter().find(|t| t.id == id)
    }

    /// Look up a template, failing with a user error that names the id.
    pub fn get(&self, id: &str) -> Result<&NotificationTemplate> {
        self.find(id).ok_or_else(|| self.not_found(id))
    }

    /// Add a new template.
    pub fn add(&mut self, template: NotificationTemplate) -> Result<()> {
        template.validate()?;
        if self.find(&template.id).is_some() {
            return Err(NoticeError::UserError(format!(
                "template '{}' already exists; use `notice template edit {}` to change it",
                template.id, template.id
            )));
        }

        self.templates.push(template);
        Ok(())
    }

    /// Apply a partial update. The record is left untouched if the result
    /// would be invalid.
    pub fn update(&mut self, id: &str, patch: TemplatePatch) -> Result<&NotificationTemplate> {
        let index = self.index_of(id)?;

        let mut updated = self.templates[index].clone();
        if let Some(name) = patch.name {
            updated.name = name;
        }
        if let Some(subject) = patch.subject {
            updated.subject = subject;
        }
        if let Some(content) = patch.content {
            updated.content = content;
        }
        updated.validate()?;

        self.templates[index] = updated;
        Ok(&self.templates[index])
    }

    /// Enable or disable a template. Returns whether the flag changed.
    pub fn set_enabled(&mut self, id: &str, enabled: bool) -> Result<bool> {
        let index = self.index_of(id)?;
        let template = &mut self.templates[index];
        let changed = template.enabled != enabled;
        template.enabled = enabled;
        Ok(changed)
    }

    /// Remove a template and return it.
    pub fn remove(&mut self, id: &str) -> Result<NotificationTemplate> {
        let index = self.index_of(id)?;
        Ok(self.templates.remove(index))
    }

    fn index_of(&self, id: &str) -> Result<usize> {
        self.templates
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| self.not_found(id))
    }

    fn not_found(&self, id: &str) -> NoticeError {
        let known: Vec<&str> = self.templates.iter().map(|t| t.id.as_str()).collect();
        let known = if known.is_empty() {
            "(none)".to_string()
        } else {
            known.join(", ")
        };
        NoticeError::UserError(format!(
            "template '{}' not found.\n\nKnown templates: {}",
            id, known
        ))
    }
}
