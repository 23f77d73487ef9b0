use super::types::{ApiMessage, ApiRequest, ApiResponse};
use crate::core::types::{
    CompletionRequest, CompletionResponse, Message, Role, StopReason, Usage,
};
use crate::providers::error::ProviderError;
use crate::providers::types::ModelId;

pub fn to_api_request(model: &ModelId, request: &CompletionRequest) -> ApiRequest {
    let messages = request
        .messages
        .iter()
        .map(|m| ApiMessage {
            role: role_name(m.role).to_string(),
            content: m.content.clone(),
        })
        .collect();

    ApiRequest {
        model: model.as_str().to_string(),
        messages,
        max_tokens: Some(request.max_tokens),
        temperature: Some(request.temperature),
        stop: if request.stop_sequences.is_empty() {
            None
        } else {
            Some(request.stop_sequences.clone())
        },
    }
}

pub fn from_api_response(response: ApiResponse) -> Result<CompletionResponse, ProviderError> {
    let usage = response.usage.map_or_else(Usage::default, |u| {
        Usage::new(u.prompt_tokens, u.completion_tokens)
    });

    let choice = response
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| ProviderError::Parse("response contained no choices".to_string()))?;

    let stop_reason = match choice.finish_reason.as_deref() {
        Some("length") => StopReason::MaxTokens,
        // The chat API reports "stop" for both end-of-turn and a matched
        // stop sequence; the agent loop does not need to tell them apart.
        _ => StopReason::EndTurn,
    };

    Ok(CompletionResponse::new(
        Message::assistant(choice.message.content),
        stop_reason,
        usage,
    ))
}

const fn role_name(role: Role) -> &'static str {
    match role {
        Role::System => "system",
        Role::User => "user",
        Role::Assistant => "assistant",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_api_request_maps_roles_and_stop() {
        let request = CompletionRequest::new(vec![
            Message::system("be brief"),
            Message::user("hello"),
        ])
        .with_stop_sequence("\nObservation:");

        let api = to_api_request(&ModelId::new("gpt-4o-mini"), &request);

        assert_eq!(api.model, "gpt-4o-mini");
        assert_eq!(api.messages[0].role, "system");
        assert_eq!(api.messages[1].role, "user");
        assert_eq!(api.stop, Some(vec!["\nObservation:".to_string()]));
    }

    #[test]
    fn test_to_api_request_omits_empty_stop() {
        let request = CompletionRequest::new(vec![Message::user("hello")]);
        let api = to_api_request(&ModelId::new("gpt-4o-mini"), &request);
        assert!(api.stop.is_none());
    }

    #[test]
    fn test_from_api_response_first_choice() {
        let json = r#"{
            "choices": [{"message": {"role": "assistant", "content": "Final Answer: 42"},
                         "finish_reason": "stop"}],
            "usage": {"prompt_tokens": 20, "completion_tokens": 10}
        }"#;
        let api: ApiResponse = serde_json::from_str(json).unwrap();

        let response = from_api_response(api).unwrap();
        assert_eq!(response.message.content, "Final Answer: 42");
        assert_eq!(response.stop_reason, StopReason::EndTurn);
        assert_eq!(response.usage.total(), 30);
    }

    #[test]
    fn test_from_api_response_length_finish() {
        let json = r#"{
            "choices": [{"message": {"role": "assistant", "content": "truncated"},
                         "finish_reason": "length"}]
        }"#;
        let api: ApiResponse = serde_json::from_str(json).unwrap();

        let response = from_api_response(api).unwrap();
        assert_eq!(response.stop_reason, StopReason::MaxTokens);
    }

    #[test]
    fn test_from_api_response_no_choices() {
        let api: ApiResponse = serde_json::from_str(r#"{"choices": []}"#).unwrap();
        let err = from_api_response(api).unwrap_err();
        assert!(matches!(err, ProviderError::Parse(_)));
    }
}
