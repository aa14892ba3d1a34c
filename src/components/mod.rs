//! UI Components
//!
//! Leptos components for the animal list page.

mod animal_list;
mod animal_card;
mod filter_bar;
mod checkup_dialog;
mod new_animal_form;

pub use animal_list::AnimalList;
pub use animal_card::AnimalCard;
pub use filter_bar::FilterBar;
pub use checkup_dialog::CheckupDialog;
pub use new_animal_form::NewAnimalForm;
