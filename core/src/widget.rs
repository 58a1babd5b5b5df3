//! # Text Input Widget
//!
//! Renders `<input type="text" ... />` for address fields. An empty value is
//! left out entirely rather than rendered as `value=""`.

use netforms_common::html::Attrs;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NetInput {
    attrs: Attrs,
}

impl NetInput {
    pub const INPUT_TYPE: &'static str = "text";

    /// A widget whose markup always carries `attrs` unless overridden at render time.
    pub fn new(attrs: Attrs) -> Self {
        Self { attrs }
    }

    /// Widget attrs, then `extra`, then `type` and `name`.
    pub fn build_attrs(&self, name: &str, extra: &Attrs) -> Attrs {
        let mut attrs = self.attrs.clone();
        attrs.extend(extra);
        attrs.set("type", Self::INPUT_TYPE);
        attrs.set("name", name);
        attrs
    }

    pub fn render(&self, name: &str, value: Option<&str>, extra: &Attrs) -> String {
        let mut attrs = self.build_attrs(name, extra);
        if let Some(value) = value.filter(|v| !v.is_empty()) {
            attrs.set("value", value);
        }
        format!("<input{} />", attrs.flatten())
    }
}
