//! Conversion of render descriptors into yew virtual nodes.

use veneer_core::{KEY_ATTRIBUTE, VNode};
use yew::Html;
use yew::virtual_dom::VTag;

/// Converts a descriptor tree into a yew node tree, preserving child order.
#[must_use]
pub fn to_html(node: VNode) -> Html {
    let mut tag = VTag::new(node.tag);
    let class = node.class_attr();
    if let Some(id) = node.id {
        tag.add_attribute("id", id);
    }
    if let Some(class) = class {
        tag.add_attribute("class", class);
    }
    if let Some(key) = node.key {
        tag.add_attribute(KEY_ATTRIBUTE, key.to_string());
    }
    for (name, value) in node.attributes {
        tag.add_attribute(name, value);
    }
    for child in node.children {
        tag.add_child(to_html(child));
    }
    tag.into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use veneer_core::{ClassSet, Component, Root};
    use yew::virtual_dom::VNode as YewNode;

    fn tag_name(html: &Html) -> Option<String> {
        match html {
            YewNode::VTag(tag) => Some(tag.tag().to_string()),
            _ => None,
        }
    }

    #[test]
    fn converts_tag_and_attributes() {
        let node = VNode::element("ons-splitter")
            .with_id("menu")
            .with_classes(&ClassSet::from("wide"))
            .with_attribute("collapse", "portrait");
        let html = to_html(node);
        assert_eq!(tag_name(&html).as_deref(), Some("ons-splitter"));
        let YewNode::VTag(tag) = &html else {
            panic!("expected an element node");
        };
        let attributes: Vec<(String, String)> = tag
            .attributes
            .iter()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect();
        assert!(attributes.contains(&("id".into(), "menu".into())));
        assert!(attributes.contains(&("class".into(), "wide".into())));
        assert!(attributes.contains(&("collapse".into(), "portrait".into())));
    }

    #[test]
    fn component_key_becomes_data_attribute() {
        let root = Root::default();
        let html = to_html(root.render());
        let YewNode::VTag(tag) = &html else {
            panic!("expected an element node");
        };
        let key = root.widget().key().to_string();
        assert!(
            tag.attributes
                .iter()
                .any(|(name, value)| name == KEY_ATTRIBUTE && value == key)
        );
    }

    #[test]
    fn leaf_without_classes_has_no_class_attribute() {
        let html = to_html(VNode::element("ons-page"));
        let YewNode::VTag(tag) = &html else {
            panic!("expected an element node");
        };
        assert!(tag.attributes.iter().all(|(name, _)| name != "class"));
    }
}
