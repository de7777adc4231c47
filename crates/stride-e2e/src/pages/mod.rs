// Page objects for the marketing site

mod home;

pub use home::HomePage;
