use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(utoipa::ToSchema)]
pub struct CreateStudentDoc {
    #[schema(example = "R1")]
    pub registration_number: String,
    #[schema(example = "Alice")]
    pub name: String,
    #[schema(example = "5A")]
    pub class: String,
    #[schema(example = 1)]
    pub roll_no: i32,
    pub contact_number: String,
    pub status: Option<bool>,
}

#[derive(utoipa::ToSchema)]
pub struct UpdateStudentDoc {
    pub name: Option<String>,
    pub class: Option<String>,
    pub roll_no: Option<i32>,
    pub contact_number: Option<String>,
    pub status: Option<bool>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::students::create_student,
        crate::routes::students::list_students,
        crate::routes::students::get_student,
        crate::routes::students::update_student,
        crate::routes::students::delete_student,
    ),
    components(
        schemas(
            HealthResponse,
            CreateStudentDoc,
            UpdateStudentDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "students")
    )
)]
pub struct ApiDoc;
