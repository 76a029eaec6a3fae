//! DOMStringMap (dataset) naming
//!
//! Conversion between camelCase dataset keys and `data-*` attribute names.

/// `accordionItemButton` -> `data-accordion-item-button`
pub fn attribute_name(key: &str) -> String {
    let mut result = String::with_capacity(key.len() + 8);
    result.push_str("data-");
    for c in key.chars() {
        if c.is_ascii_uppercase() {
            result.push('-');
            result.push(c.to_ascii_lowercase());
        } else {
            result.push(c);
        }
    }
    result
}

/// `data-accordion-item-button` -> `accordionItemButton`
pub fn key_for(attribute: &str) -> Option<String> {
    let rest = attribute.strip_prefix("data-")?;
    let mut result = String::with_capacity(rest.len());
    let mut capitalize_next = false;
    for c in rest.chars() {
        if c == '-' {
            capitalize_next = true;
        } else if capitalize_next {
            result.push(c.to_ascii_uppercase());
            capitalize_next = false;
        } else {
            result.push(c);
        }
    }
    Some(result)
}
