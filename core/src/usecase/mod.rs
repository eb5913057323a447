pub mod history;

#[cfg(test)]
mod history_test;
