// Headline layout for the fixed-size post canvas.
// Pure functions over in-memory strings: wrap → compose → SVG document.

pub mod compose;
pub mod template;
pub mod wrap;

// Re-export the public API consumed by the render handlers.
pub use template::{hindi_date_stamp, PostTemplate};
