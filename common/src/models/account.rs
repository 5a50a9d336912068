use crate::UserId;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// 性别；非 male/female 的取值（含缺省）一律视为未指定
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase", from = "Option<String>")]
pub enum Gender {
    Male,
    Female,
    #[default]
    Unspecified,
}

impl From<Option<String>> for Gender {
    fn from(value: Option<String>) -> Self {
        match value.as_deref() {
            Some("male") => Gender::Male,
            Some("female") => Gender::Female,
            _ => Gender::Unspecified,
        }
    }
}

/// 经纬度（度）
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    fn from_parts(lat: Option<f64>, lon: Option<f64>) -> Option<Self> {
        Some(Self { lat: lat?, lon: lon? })
    }
}

/// 注册账号，只在目录内部流转，不会被序列化出去
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    pub id: UserId,
    pub email: String,
    /// 明文存储，登录时按值比较
    pub password: String,
    pub name: String,
    pub age: Option<u32>,
    pub photo: Option<String>,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub gender: Gender,
}

impl Account {
    pub fn from_new(id: UserId, new: NewAccount) -> Self {
        Self {
            id,
            email: new.email,
            password: new.password,
            name: new.name,
            age: new.age,
            photo: new.photo,
            lat: new.lat,
            lon: new.lon,
            gender: new.gender,
        }
    }

    /// 对外视图，不含密码
    pub fn to_profile(&self) -> UserProfile {
        UserProfile {
            id: self.id,
            email: self.email.clone(),
            name: self.name.clone(),
            age: self.age,
            photo: self.photo.clone(),
            lat: self.lat,
            lon: self.lon,
            gender: self.gender,
        }
    }
}

/// 账号公开信息（注册/登录返回、用户列表）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserProfile {
    pub id: UserId,
    #[schema(example = "ana@example.com")]
    pub email: String,
    #[schema(example = "Ana")]
    pub name: String,
    #[serde(default)]
    #[schema(example = 62)]
    pub age: Option<u32>,
    #[serde(default)]
    pub photo: Option<String>,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lon: Option<f64>,
    #[serde(default)]
    pub gender: Gender,
}

impl UserProfile {
    pub fn coordinates(&self) -> Option<Coordinates> {
        Coordinates::from_parts(self.lat, self.lon)
    }
}

/// 注册请求体
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct NewAccount {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub age: Option<u32>,
    /// data URL 或图片地址
    #[serde(default)]
    pub photo: Option<String>,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lon: Option<f64>,
    #[serde(default)]
    pub gender: Gender,
}

/// 登录请求体
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct Credentials {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}
