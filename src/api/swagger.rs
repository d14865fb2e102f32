use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Coffee Service API",
        version = "1.0.0",
        description = "CRUD over the `coffees` and `users` collections. Results are the raw \
                       database records or write acknowledgments. A JSON body that does not \
                       parse is rejected with status 400 and \
                       `{\"message\": \"Bad Request\"}`; every other failure is \
                       `{\"message\": \"Internal Server Error\"}` with status 500."
    ),
    paths(
        // Health
        crate::api::health::welcome,
        crate::api::health::health_check,

        // Coffees
        crate::api::coffees::list_coffees,
        crate::api::coffees::get_coffee,
        crate::api::coffees::create_coffee,
        crate::api::coffees::replace_coffee,
        crate::api::coffees::delete_coffee,

        // Users
        crate::api::users::create_user,
        crate::api::users::list_users,
        crate::api::users::delete_user,
        crate::api::users::update_last_login,
    ),
    components(
        schemas(
            crate::api::health::HealthResponse,
            crate::models::CoffeeFields,
            crate::models::LoginUpdate,
            crate::models::InsertAck,
            crate::models::UpdateAck,
            crate::models::DeleteAck,
        )
    ),
    tags(
        (name = "Health", description = "Welcome message and liveness."),
        (name = "Coffees", description = "Coffee records. Ids are MongoDB ObjectIds."),
        (name = "Users", description = "User records. Login updates are keyed by email."),
    )
)]
pub struct ApiDoc;
