pub mod gradio_client;
pub mod mock_reply;
pub mod resolver;
pub mod space_api;
