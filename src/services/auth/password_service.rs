//! bcrypt 비밀번호 해싱 서비스

use std::time::Instant;
use log::debug;
use crate::config::PasswordConfig;
use crate::errors::{AppError, ErrorContext};

/// 단방향 비밀번호 해셔
///
/// 해시마다 bcrypt가 새 솔트를 만들기 때문에 같은 평문도 매번 다른 해시가 나옵니다.
#[derive(Debug, Clone, Copy)]
pub struct PasswordService {
    cost: u32,
}

impl PasswordService {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// 환경 변수(`BCRYPT_COST`)와 실행 환경에 맞는 cost로 생성
    pub fn from_env() -> Self {
        Self::new(PasswordConfig::bcrypt_cost())
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// 평문 비밀번호를 해싱합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - bcrypt 해싱 실패
    pub fn hash(&self, plaintext: &str) -> Result<String, AppError> {
        let started = Instant::now();

        let hashed = bcrypt::hash(plaintext, self.cost).context("failed to hash password")?;

        debug!("Password hashing took: {:?} (cost {})", started.elapsed(), self.cost);
        Ok(hashed)
    }

    /// 저장된 해시와 평문을 비교합니다.
    ///
    /// 불일치는 물론 손상된 해시도 `false`로 취급합니다.
    pub fn verify(&self, hashed: &str, plaintext: &str) -> bool {
        let started = Instant::now();
        let matched = bcrypt::verify(plaintext, hashed).unwrap_or(false);
        debug!("Password verification took: {:?}", started.elapsed());
        matched
    }
}
