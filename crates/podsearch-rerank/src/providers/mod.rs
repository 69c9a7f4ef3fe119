pub mod bedrock;
pub mod cohere;

pub use bedrock::BedrockRerankProvider;
pub use cohere::CohereRerankProvider;
