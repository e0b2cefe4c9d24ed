//! Tool domain traits
//!
//! Contains pure domain logic traits for tool validation.
//! The async ToolExecutorPort is defined in the application layer (ports).

use super::entities::{ParamType, ToolCall, ToolDefinition};
use super::value_objects::ToolError;

/// Validator for tool calls
///
/// This is a pure domain trait that validates tool calls
/// against their definitions without any I/O operations.
pub trait ToolValidator {
    fn validate(&self, call: &ToolCall, definition: &ToolDefinition) -> Result<(), ToolError>;
}

/// Default implementation of ToolValidator
#[derive(Debug, Clone, Default)]
pub struct DefaultToolValidator;

impl ToolValidator for DefaultToolValidator {
    fn validate(&self, call: &ToolCall, definition: &ToolDefinition) -> Result<(), ToolError> {
        for param in &definition.parameters {
            match call.arguments.get(&param.name) {
                None if param.required => {
                    return Err(ToolError::invalid_argument(format!(
                        "Missing required parameter '{}' for tool '{}'",
                        param.name, definition.name
                    )));
                }
                // Quoted digits are tolerated for integers; see ToolCall::get_u64
                Some(value)
                    if !param.param_type.accepts(value)
                        && !(param.param_type == ParamType::Integer
                            && call.get_u64(&param.name).is_some()) =>
                {
                    return Err(ToolError::invalid_argument(format!(
                        "Parameter '{}' for tool '{}' must be a {}",
                        param.name,
                        definition.name,
                        param.param_type.as_str()
                    )));
                }
                _ => {}
            }
        }

        for arg_name in call.arguments.keys() {
            if definition.parameter(arg_name).is_none() {
                return Err(ToolError::invalid_argument(format!(
                    "Unknown parameter '{}' for tool '{}'",
                    arg_name, definition.name
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tool::entities::ToolParameter;

    fn definition() -> ToolDefinition {
        ToolDefinition::new("test", "test tool")
            .with_parameter(ToolParameter::new("name", "A name", true))
            .with_parameter(
                ToolParameter::new("number", "A number", true).with_type(ParamType::Integer),
            )
    }

    #[test]
    fn test_validator_missing_required() {
        let call = ToolCall::new("test").with_arg("name", "x");
        let err = DefaultToolValidator.validate(&call, &definition()).unwrap_err();
        assert!(err.message.contains("Missing required parameter 'number'"));
    }

    #[test]
    fn test_validator_unknown_param() {
        let call = ToolCall::new("test")
            .with_arg("name", "x")
            .with_arg("number", 1)
            .with_arg("extra", "value");
        let err = DefaultToolValidator.validate(&call, &definition()).unwrap_err();
        assert!(err.message.contains("Unknown parameter"));
    }

    #[test]
    fn test_validator_wrong_type() {
        let call = ToolCall::new("test")
            .with_arg("name", "x")
            .with_arg("number", true);
        let err = DefaultToolValidator.validate(&call, &definition()).unwrap_err();
        assert_eq!(err.code, "INVALID_ARGUMENT");
        assert!(err.message.contains("must be a integer"));
    }

    #[test]
    fn test_validator_valid_call() {
        let call = ToolCall::new("test")
            .with_arg("name", "x")
            .with_arg("number", "42");
        assert!(DefaultToolValidator.validate(&call, &definition()).is_ok());
    }
}
