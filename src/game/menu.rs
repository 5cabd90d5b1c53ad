//! Menu tree
//!
//! Leaves are actions; inner nodes open a sub-menu.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuItem {
    About,
    PlayIntro,
    ShareScore,
    Reset,
    ReallyReset,
    CancelReset,
}

impl MenuItem {
    pub fn title(&self) -> &'static str {
        match self {
            MenuItem::About => "About",
            MenuItem::PlayIntro => "Play intro",
            MenuItem::ShareScore => "Share score",
            MenuItem::Reset => "Reset",
            MenuItem::ReallyReset => "Really reset",
            MenuItem::CancelReset => "Cancel",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MenuNode {
    pub item: MenuItem,
    pub children: Vec<MenuNode>,
}

impl MenuNode {
    fn leaf(item: MenuItem) -> Self {
        Self {
            item,
            children: Vec::new(),
        }
    }

    fn entries(nodes: &[MenuNode]) -> Vec<MenuItem> {
        nodes.iter().map(|node| node.item).collect()
    }
}

/// Top level of the menu
pub fn tree() -> Vec<MenuNode> {
    vec![
        MenuNode::leaf(MenuItem::About),
        MenuNode::leaf(MenuItem::PlayIntro),
        MenuNode::leaf(MenuItem::ShareScore),
        MenuNode {
            item: MenuItem::Reset,
            children: vec![
                MenuNode::leaf(MenuItem::ReallyReset),
                MenuNode::leaf(MenuItem::CancelReset),
            ],
        },
    ]
}

/// Entries shown when the menu opens
pub fn root_entries() -> Vec<MenuItem> {
    MenuNode::entries(&tree())
}

fn find(nodes: &[MenuNode], item: MenuItem) -> Option<&MenuNode> {
    nodes
        .iter()
        .find_map(|node| if node.item == item { Some(node) } else { find(&node.children, item) })
}

/// What tapping a menu entry leads to
#[derive(Debug, Clone, PartialEq)]
pub enum MenuLookup {
    Submenu(Vec<MenuItem>),
    Leaf(MenuItem),
    /// Not among the visible entries
    Missing,
}

/// Resolve `item` tapped while `visible` entries are shown
pub fn lookup(visible: &[MenuItem], item: MenuItem) -> MenuLookup {
    if !visible.contains(&item) {
        return MenuLookup::Missing;
    }
    let nodes = tree();
    match find(&nodes, item) {
        Some(node) if !node.children.is_empty() => {
            MenuLookup::Submenu(MenuNode::entries(&node.children))
        }
        Some(node) => MenuLookup::Leaf(node.item),
        None => MenuLookup::Missing,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_entries() {
        assert_eq!(
            root_entries(),
            vec![MenuItem::About, MenuItem::PlayIntro, MenuItem::ShareScore, MenuItem::Reset]
        );
    }

    #[test]
    fn test_reset_opens_confirmation() {
        assert_eq!(
            lookup(&root_entries(), MenuItem::Reset),
            MenuLookup::Submenu(vec![MenuItem::ReallyReset, MenuItem::CancelReset])
        );
    }

    #[test]
    fn test_nested_leaf_found_when_visible() {
        let confirm = [MenuItem::ReallyReset, MenuItem::CancelReset];
        assert_eq!(
            lookup(&confirm, MenuItem::ReallyReset),
            MenuLookup::Leaf(MenuItem::ReallyReset)
        );
        assert_eq!(lookup(&root_entries(), MenuItem::About), MenuLookup::Leaf(MenuItem::About));
    }

    #[test]
    fn test_hidden_entry_is_missing() {
        assert_eq!(lookup(&root_entries(), MenuItem::ReallyReset), MenuLookup::Missing);
    }
}
