use crate::errors::ClientError;
use common::models::{Coordinates, Credentials, Gender, NewAccount};
use common::util::validate::first_error_message;
use validator::Validate;

const MISSING_FIELDS: &str = "Please fill in all fields.";
const MISSING_PHOTO: &str = "Please upload a profile photo.";

/// 登录表单
#[derive(Debug, Clone, Default, Validate)]
pub struct LoginForm {
    #[validate(length(min = 1, message = "Please fill in all fields."))]
    pub email: String,
    #[validate(length(min = 1, message = "Please fill in all fields."))]
    pub password: String,
}

impl LoginForm {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self { email: email.into(), password: password.into() }
    }

    pub fn check(&self) -> Result<Credentials, ClientError> {
        if let Err(errs) = self.validate() {
            let msg = first_error_message(&errs, &["email", "password"]).unwrap_or_else(|| MISSING_FIELDS.to_string());
            return Err(ClientError::Validation(msg));
        }
        Ok(Credentials { email: self.email.clone(), password: self.password.clone() })
    }
}

/// 注册表单；照片已是 data URL 或图片地址
#[derive(Debug, Clone, Default, Validate)]
pub struct RegisterForm {
    #[validate(length(min = 1, message = "Please fill in all fields."))]
    pub email: String,
    #[validate(length(min = 1, message = "Please fill in all fields."))]
    pub password: String,
    #[validate(length(min = 1, message = "Please fill in all fields."))]
    pub name: String,
    pub age: Option<u32>,
    #[validate(required(message = "Please upload a profile photo."))]
    pub photo: Option<String>,
    pub gender: Gender,
}

impl RegisterForm {
    /// 字段缺失优先于照片缺失报错
    pub fn check(&self, location: Option<Coordinates>) -> Result<NewAccount, ClientError> {
        if let Err(errs) = self.validate() {
            let msg = first_error_message(&errs, &["email", "password", "name", "photo"])
                .unwrap_or_else(|| MISSING_PHOTO.to_string());
            return Err(ClientError::Validation(msg));
        }
        Ok(NewAccount {
            email: self.email.clone(),
            password: self.password.clone(),
            name: self.name.clone(),
            age: self.age,
            photo: self.photo.clone(),
            lat: location.map(|c| c.lat),
            lon: location.map(|c| c.lon),
            gender: self.gender,
        })
    }
}
