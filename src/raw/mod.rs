mod arena;
mod handle;
mod node;
mod raw_avl_tree_map;
mod size;

pub(crate) use raw_avl_tree_map::RawAvlTreeMap;
