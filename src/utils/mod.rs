pub mod jwt_utils;
pub mod validated_wrapper;
pub mod validator_utils;
pub mod view_response;
