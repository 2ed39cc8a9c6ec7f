pub mod horaire;
