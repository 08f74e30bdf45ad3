pub mod requests;
pub mod resource;
pub mod responses;

pub use requests::{
    ConsentCreationRequest, ConsentRequestData, ConsentUpdateRequest, PreProcessRequest,
};
pub use resource::{AuthorizationPayload, ConsentResourceData};
pub use responses::{ErrorResponse, ResponseStatus, SuccessResponse, SuccessResponseData};
