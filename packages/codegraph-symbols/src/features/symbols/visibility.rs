//! Privacy rules

use tree_sitter::Node;

use crate::features::grammar::domain::PrivacyRule;
use crate::shared::models::Visibility;
use crate::shared::utils::tree_sitter::node_text;

fn modifier_children<'a>(node: Node<'a>, kinds: &[&str]) -> Vec<Node<'a>> {
    let mut cursor = node.walk();
    let found: Vec<Node<'a>> = node
        .children(&mut cursor)
        .filter(|child| kinds.contains(&child.kind()))
        .collect();
    found
}

/// Visibility of a declaration named `name`
///
/// Modifier-based rules inspect the declaration and its wrapper node
/// (Java fields keep modifiers on `field_declaration`).
pub fn visibility_of<'a>(
    rule: &PrivacyRule,
    name: &str,
    declaration: Node<'a>,
    wrapper: Option<Node<'a>>,
    source: &str,
) -> Visibility {
    let carriers = std::iter::once(declaration).chain(wrapper);

    let private = match rule {
        PrivacyRule::UnderscorePrefix => {
            let dunder = name.len() > 4 && name.starts_with("__") && name.ends_with("__");
            name.starts_with('_') && !dunder
        }
        PrivacyRule::Capitalization => !name.chars().next().is_some_and(char::is_uppercase),
        PrivacyRule::PrivateModifier {
            modifier_kinds,
            private_words,
        } => carriers
            .flat_map(|node| modifier_children(node, modifier_kinds))
            .any(|modifier| {
                node_text(modifier, source)
                    .split(|c: char| !c.is_alphanumeric() && c != '_')
                    .any(|word| private_words.contains(&word))
            }),
        PrivacyRule::RequiresModifier { modifier_kinds } => carriers
            .flat_map(|node| modifier_children(node, modifier_kinds))
            .next()
            .is_none(),
    };

    if private {
        Visibility::Private
    } else {
        Visibility::Public
    }
}
