use crate::api::{AdminRegisterResponse, ApiClient, ApiError, MessageResponse};
use std::rc::Rc;

#[derive(Clone)]
pub struct RegisterRepository {
    client: Rc<ApiClient>,
}

impl RegisterRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn send_otp(&self, email: &str) -> Result<(), ApiError> {
        self.client.send_otp(email).await
    }

    pub async fn verify_otp(&self, email: &str, otp: &str) -> Result<MessageResponse, ApiError> {
        self.client.verify_otp(email, otp).await
    }

    pub async fn register(
        &self,
        email: &str,
        password: &str,
    ) -> Result<AdminRegisterResponse, ApiError> {
        self.client.register_admin(email, password).await
    }
}
