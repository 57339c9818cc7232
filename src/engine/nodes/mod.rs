pub mod image_caption;
pub mod ner;
pub mod sentiment_intensity;
pub mod summarization;
pub mod system_prompt;
pub mod translation;
pub mod tts;
pub mod user_info;

pub use image_caption::ImageCaptionNode;
pub use ner::NerNode;
pub use sentiment_intensity::SentimentIntensityNode;
pub use summarization::SummarizationNode;
pub use system_prompt::SystemPromptNode;
pub use translation::TranslationNode;
pub use tts::TtsNode;
pub use user_info::UserInfoNode;
