pub mod accordion;
pub mod skeleton;

pub use accordion::{draw_accordion, AccordionModel, AccordionProps, AccordionSection};
pub use skeleton::{skeleton_block, skeleton_row};
