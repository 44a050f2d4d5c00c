mod markdown;
mod qr_vm;
mod quiz_vm;
mod tree_vm;

pub use markdown::{markdown_to_html, sanitize_html};
pub use qr_vm::{QrGridVm, map_decorative, map_share_qr};
pub use quiz_vm::{ActiveQuizVm, CompletedQuizVm, QuizOptionVm, map_active, map_completed};
pub use tree_vm::{TreeBoxVm, TreeCanvasVm, TreeEdgeVm, map_tree};
