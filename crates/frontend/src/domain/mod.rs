pub mod a001_screen;
pub mod a002_company;
pub mod a003_contract;
