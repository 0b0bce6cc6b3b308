pub mod card_writer;
pub mod number_reader;
