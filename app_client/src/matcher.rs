//! 推荐过滤：年龄区间、性别、距离，三者同时满足才保留。
//!
//! 结果保持目录原有顺序，不做任何排序。

use common::models::{Coordinates, Gender, UserProfile};
use common::util::geo_util::distance_km;

pub const MIN_AGE_BOUND: u32 = 50;
pub const MAX_AGE_BOUND: u32 = 120;

/// 性别筛选
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GenderFilter {
    #[default]
    All,
    Male,
    Female,
}

impl GenderFilter {
    pub fn matches(&self, gender: Gender) -> bool {
        match self {
            GenderFilter::All => true,
            GenderFilter::Male => gender == Gender::Male,
            GenderFilter::Female => gender == Gender::Female,
        }
    }
}

/// 步进调整的年龄边界
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgeBound {
    Min,
    Max,
}

/// 过滤条件，只存在于客户端
#[derive(Debug, Clone, PartialEq)]
pub struct FilterCriteria {
    pub min_age: u32,
    pub max_age: u32,
    /// 公里
    pub max_distance: u32,
    pub gender: GenderFilter,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self { min_age: MIN_AGE_BOUND, max_age: MAX_AGE_BOUND, max_distance: 50, gender: GenderFilter::All }
    }
}

impl FilterCriteria {
    /// +/- 按钮：最小值夹在 [50, max_age]，最大值夹在 [min_age, 120]
    pub fn step(&mut self, bound: AgeBound, step: i32) {
        match bound {
            AgeBound::Min => {
                let value = self.min_age as i64 + step as i64;
                self.min_age = value.min(self.max_age as i64).max(MIN_AGE_BOUND as i64) as u32;
            }
            AgeBound::Max => {
                let value = self.max_age as i64 + step as i64;
                self.max_age = value.max(self.min_age as i64).min(MAX_AGE_BOUND as i64) as u32;
            }
        }
    }

    pub fn accepts_age(&self, age: Option<u32>) -> bool {
        age.is_some_and(|age| self.min_age <= age && age <= self.max_age)
    }

    /// 距离未知时不参与过滤
    pub fn accepts_distance(&self, distance: Option<u32>) -> bool {
        distance.is_none_or(|d| d <= self.max_distance)
    }
}

/// 通过过滤的候选人及其距离（未知为 `None`）
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub profile: UserProfile,
    pub distance: Option<u32>,
}

pub fn filter_candidates(
    candidates: &[UserProfile],
    origin: Option<Coordinates>,
    criteria: &FilterCriteria,
) -> Vec<Candidate> {
    candidates
        .iter()
        .filter_map(|profile| {
            let distance = distance_km(origin, profile.coordinates());
            let keep = criteria.accepts_age(profile.age)
                && criteria.gender.matches(profile.gender)
                && criteria.accepts_distance(distance);
            keep.then(|| Candidate { profile: profile.clone(), distance })
        })
        .collect()
}
