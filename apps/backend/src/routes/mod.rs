pub mod flashcards;
