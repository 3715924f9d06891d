pub use super::properties::Entity as Properties;
pub use super::users::Entity as Users;
pub use super::voice_interactions::Entity as VoiceInteractions;
