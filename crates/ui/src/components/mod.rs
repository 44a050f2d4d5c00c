mod ambiguity_viz;
mod cst_ast;
mod dangling_else;
mod production;
mod quiz;
mod share_card;
mod topic_card;
mod tree_view;

pub use ambiguity_viz::AmbiguityVisualizer;
pub use cst_ast::CstAstComparison;
pub use dangling_else::DanglingElseDemo;
pub use production::ProductionVisualizer;
pub use quiz::Quiz;
pub use share_card::ShareCard;
pub use topic_card::TopicCard;
pub use tree_view::{TreeCanvas, TreeVisualizer};
