//! GenerateRecipeHandler - gate-check the ledger, invoke the model,
//! debit one credit.

use std::sync::Arc;
use thiserror::Error;

use crate::application::CreditLedger;
use crate::domain::credits::CreditError;
use crate::domain::foundation::AuthenticatedUser;
use crate::ports::{GenerationRequest, IdentityProvider, RecipeModel};

/// Token budget for one recipe.
const MAX_TOKENS: u32 = 1024;

/// Command to generate a recipe from an ingredient list.
#[derive(Debug, Clone)]
pub struct GenerateRecipeCommand {
    pub ingredients: Vec<String>,
}

/// Result of a successful generation.
#[derive(Debug, Clone)]
pub struct GeneratedRecipe {
    /// Raw generated text, unstructured.
    pub text: String,

    /// Balance after the post-generation debit (latest ledger read
    /// when the debit could not be applied).
    pub credits_remaining: i64,
}

/// Errors surfaced by the generation flow.
#[derive(Debug, Clone, Error)]
pub enum RecipeError {
    #[error("User not authenticated")]
    Unauthenticated,

    #[error("No ingredients provided")]
    EmptyIngredients,

    #[error("Insufficient credits: {available} available")]
    InsufficientCredit { available: i64 },

    #[error("Recipe generation failed: {0}")]
    Generation(String),

    #[error("Credit store error: {0}")]
    Store(String),
}

/// Handler for the recipe generation flow.
///
/// The balance gate runs before the model is invoked; the debit runs
/// after. A debit that fails after a successful generation does not
/// withhold the text - the user experience wins over strict
/// debit-before-serve ordering, and the event is logged instead.
pub struct GenerateRecipeHandler {
    identity: Arc<dyn IdentityProvider>,
    ledger: Arc<CreditLedger>,
    model: Arc<dyn RecipeModel>,
}

impl GenerateRecipeHandler {
    pub fn new(
        identity: Arc<dyn IdentityProvider>,
        ledger: Arc<CreditLedger>,
        model: Arc<dyn RecipeModel>,
    ) -> Self {
        Self {
            identity,
            ledger,
            model,
        }
    }

    pub async fn handle(
        &self,
        cmd: GenerateRecipeCommand,
    ) -> Result<GeneratedRecipe, RecipeError> {
        let user = self
            .identity
            .current_user()
            .await
            .map_err(|_| RecipeError::Unauthenticated)?;

        let ingredients: Vec<&str> = cmd
            .ingredients
            .iter()
            .map(|i| i.trim())
            .filter(|i| !i.is_empty())
            .collect();
        if ingredients.is_empty() {
            return Err(RecipeError::EmptyIngredients);
        }

        // 1. Gate on the current balance; the model is never invoked
        //    for an empty account.
        let balance = self.balance_of(&user).await?;
        if balance <= 0 {
            return Err(RecipeError::InsufficientCredit { available: balance });
        }

        // 2. Invoke the model. Failures leave the balance untouched.
        let prompt = format!(
            "Generate a recipe using these ingredients: {}",
            ingredients.join(", ")
        );
        let text = self
            .model
            .generate(GenerationRequest::new(prompt, MAX_TOKENS))
            .await
            .map_err(|e| RecipeError::Generation(e.to_string()))?;

        // 3. Debit one credit. The text is already generated, so a
        //    failed debit is reported through the balance, not as an
        //    error.
        let credits_remaining = match self.ledger.debit(&user.id, 1).await {
            Ok(remaining) => remaining,
            Err(err) => {
                tracing::warn!(
                    user_id = %user.id,
                    error = %err,
                    "debit after successful generation failed"
                );
                self.balance_of(&user).await.unwrap_or(0)
            }
        };

        Ok(GeneratedRecipe {
            text,
            credits_remaining,
        })
    }

    async fn balance_of(&self, user: &AuthenticatedUser) -> Result<i64, RecipeError> {
        self.ledger
            .balance(&user.id, user.email.as_deref())
            .await
            .map_err(|e| match e {
                CreditError::Store(message) => RecipeError::Store(message),
                CreditError::InsufficientCredit { available, .. } => {
                    RecipeError::InsufficientCredit { available }
                }
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::MockRecipeModel;
    use crate::adapters::auth::StaticIdentityProvider;
    use crate::adapters::storage::InMemoryCreditStore;
    use crate::domain::foundation::UserId;
    use crate::ports::CreditStore;

    fn handler_with(
        store: InMemoryCreditStore,
        model: MockRecipeModel,
    ) -> GenerateRecipeHandler {
        GenerateRecipeHandler::new(
            Arc::new(StaticIdentityProvider::new(
                UserId::new("u-1").unwrap(),
                Some("u1@example.com".to_string()),
            )),
            Arc::new(CreditLedger::new(Arc::new(store))),
            Arc::new(model),
        )
    }

    fn command(ingredients: &[&str]) -> GenerateRecipeCommand {
        GenerateRecipeCommand {
            ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[tokio::test]
    async fn new_user_is_refused_before_model_invocation() {
        let model = MockRecipeModel::new().with_response("unreachable");
        let handler = handler_with(InMemoryCreditStore::new(), model.clone());

        let err = handler.handle(command(&["egg"])).await.unwrap_err();
        assert!(matches!(
            err,
            RecipeError::InsufficientCredit { available: 0 }
        ));
        assert_eq!(model.call_count(), 0);
    }

    #[tokio::test]
    async fn successful_generation_debits_one_credit() {
        let store =
            InMemoryCreditStore::new().with_balance(UserId::new("u-1").unwrap(), 3);
        let model = MockRecipeModel::new().with_response("Egg-flour pancakes: ...");
        let handler = handler_with(store, model.clone());

        let recipe = handler.handle(command(&["egg", "flour"])).await.unwrap();
        assert_eq!(recipe.text, "Egg-flour pancakes: ...");
        assert_eq!(recipe.credits_remaining, 2);

        assert_eq!(model.call_count(), 1);
        let prompt = &model.calls()[0].prompt;
        assert!(prompt.contains("egg") && prompt.contains("flour"));
    }

    #[tokio::test]
    async fn model_failure_leaves_balance_untouched() {
        let store =
            InMemoryCreditStore::new().with_balance(UserId::new("u-1").unwrap(), 3);
        let model = MockRecipeModel::new().with_error(
            crate::ports::ModelError::Provider("throttled".to_string()),
        );
        let handler = handler_with(store.clone(), model);

        let err = handler.handle(command(&["egg"])).await.unwrap_err();
        assert!(matches!(err, RecipeError::Generation(_)));
        assert_eq!(
            store
                .find(&UserId::new("u-1").unwrap())
                .await
                .unwrap()
                .unwrap()
                .credits,
            3
        );
    }

    #[tokio::test]
    async fn blank_ingredient_list_is_rejected_without_side_effects() {
        let model = MockRecipeModel::new().with_response("unreachable");
        let handler = handler_with(
            InMemoryCreditStore::new().with_balance(UserId::new("u-1").unwrap(), 3),
            model.clone(),
        );

        let err = handler.handle(command(&["  ", ""])).await.unwrap_err();
        assert!(matches!(err, RecipeError::EmptyIngredients));
        assert_eq!(model.call_count(), 0);
    }

    #[tokio::test]
    async fn unauthenticated_caller_is_rejected() {
        let handler = GenerateRecipeHandler::new(
            Arc::new(StaticIdentityProvider::unauthenticated()),
            Arc::new(CreditLedger::new(Arc::new(InMemoryCreditStore::new()))),
            Arc::new(MockRecipeModel::new()),
        );
        assert!(matches!(
            handler.handle(command(&["egg"])).await,
            Err(RecipeError::Unauthenticated)
        ));
    }
}
