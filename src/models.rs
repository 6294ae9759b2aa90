pub mod greeting_dto;
pub mod health_dto;
