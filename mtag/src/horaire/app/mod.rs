mod horaire_app;
mod operation;

pub use horaire_app::HoraireApp;
pub use operation::HoraireOperation;
