use crate::{RawList, RawListError};
use regex::Regex;

/// In-place transforms of single elements of a text list.
///
/// Every operation replaces the element at `index` with the transformed
/// value and panics if `index >= len()`.
pub trait TextElementOps {
    /// Appends `suffix` to the element.
    fn element_concat(&mut self, index: usize, suffix: &str) -> &mut Self;

    /// Appends a single character to the element.
    fn element_push(&mut self, index: usize, ch: char) -> &mut Self;

    /// Strips leading and trailing characters up to and including `' '`
    /// (ASCII control characters and space).
    fn element_trim(&mut self, index: usize) -> &mut Self;

    fn element_replace_char(&mut self, index: usize, from: char, to: char) -> &mut Self;

    /// Replaces every occurrence of the literal `target`.
    fn element_replace(&mut self, index: usize, target: &str, replacement: &str) -> &mut Self;

    /// Replaces every match of the regular expression `pattern`.
    ///
    /// `replacement` may refer to capture groups as `$1` or `${name}`. A
    /// group name takes every following letter, digit and underscore, so
    /// group 1 followed by `a` is written `${1}a`; `$1a` names group `1a`
    /// and expands to nothing. `$$` is a literal `$`.
    fn element_replace_all(&mut self, index: usize, pattern: &str, replacement: &str) -> Result<&mut Self, RawListError>;

    /// Replaces the first match of the regular expression `pattern`, with
    /// the same replacement syntax as `element_replace_all`.
    fn element_replace_first(&mut self, index: usize, pattern: &str, replacement: &str) -> Result<&mut Self, RawListError>;

    fn element_to_lowercase(&mut self, index: usize) -> &mut Self;

    fn element_to_uppercase(&mut self, index: usize) -> &mut Self;
}

impl RawList<String> {
    fn map_element<F>(&mut self, index: usize, transform: F) -> &mut Self where F: FnOnce(&str) -> String {
        let slot = self.get_mut(index);
        let updated = transform(slot.as_str());
        *slot = updated;
        self
    }
}

impl TextElementOps for RawList<String> {
    fn element_concat(&mut self, index: usize, suffix: &str) -> &mut Self {
        self.get_mut(index).push_str(suffix);
        self
    }

    fn element_push(&mut self, index: usize, ch: char) -> &mut Self {
        self.get_mut(index).push(ch);
        self
    }

    fn element_trim(&mut self, index: usize) -> &mut Self {
        self.map_element(index, |s| s.trim_matches(|c: char| c <= ' ').to_string())
    }

    fn element_replace_char(&mut self, index: usize, from: char, to: char) -> &mut Self {
        self.map_element(index, |s| s.chars().map(|c| if c == from { to } else { c }).collect())
    }

    fn element_replace(&mut self, index: usize, target: &str, replacement: &str) -> &mut Self {
        self.map_element(index, |s| s.replace(target, replacement))
    }

    fn element_replace_all(&mut self, index: usize, pattern: &str, replacement: &str) -> Result<&mut Self, RawListError> {
        let regex = Regex::new(pattern)?;
        Ok(self.map_element(index, |s| regex.replace_all(s, replacement).into_owned()))
    }

    fn element_replace_first(&mut self, index: usize, pattern: &str, replacement: &str) -> Result<&mut Self, RawListError> {
        let regex = Regex::new(pattern)?;
        Ok(self.map_element(index, |s| regex.replace(s, replacement).into_owned()))
    }

    fn element_to_lowercase(&mut self, index: usize) -> &mut Self {
        self.map_element(index, str::to_lowercase)
    }

    fn element_to_uppercase(&mut self, index: usize) -> &mut Self {
        self.map_element(index, str::to_uppercase)
    }
}

impl RawList<char> {
    /// A char list holding the characters of `text`, trimmed to their count.
    pub fn from_text(text: &str) -> RawList<char> {
        RawList::from_vec(text.chars().collect())
    }

    /// Appends the characters of `text` through the bulk append path.
    pub fn append_str(&mut self, text: &str) -> &mut Self {
        let chars: Vec<char> = text.chars().collect();
        self.append_slice(&chars)
    }

    pub fn insert_str(&mut self, index: usize, text: &str) -> &mut Self {
        let chars: Vec<char> = text.chars().collect();
        self.insert_slice(index, &chars)
    }

    /// The live characters as a string.
    pub fn string_of(&self) -> String {
        self.iter().collect()
    }

    pub fn string_of_at(&self, offset: usize, len: usize) -> String {
        self.as_slice()[offset..][..len].iter().collect()
    }

    pub fn string_of_range(&self, from: usize, to: usize) -> String {
        self.as_slice()[from..to].iter().collect()
    }
}
