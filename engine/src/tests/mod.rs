

mod rates;

// History and facade tests
mod engine;
