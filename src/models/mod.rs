pub mod about;
pub mod award;
pub mod blog;
pub mod contact;
pub mod education;
pub mod experience;
pub mod hero;
pub mod licence;
pub mod project;
pub mod settings;
pub mod skill;
pub mod social;
