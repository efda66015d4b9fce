use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::features::about::{dtos as about_dtos, handlers as about_handlers};
use crate::features::auth::{dtos as auth_dtos, handlers as auth_handlers};
use crate::features::dashboard::{dtos as dashboard_dtos, handlers as dashboard_handlers};
use crate::features::designs::{dtos as designs_dtos, handlers as designs_handlers};
use crate::features::phones::{dtos as phones_dtos, handlers as phones_handlers};
use crate::features::search::{dtos as search_dtos, handlers as search_handlers};
use crate::features::videos::{dtos as videos_dtos, handlers as videos_handlers};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Auth
        auth_handlers::login,
        auth_handlers::logout,
        // Phones
        phones_handlers::list_phones,
        phones_handlers::create_phone,
        // Designs
        designs_handlers::list_designs,
        designs_handlers::create_design,
        // Videos
        videos_handlers::list_videos,
        videos_handlers::create_video,
        // About
        about_handlers::get_about,
        about_handlers::update_about,
        // Search
        search_handlers::search,
        // Dashboard
        dashboard_handlers::get_overview,
    ),
    components(
        schemas(
            // Shared
            Meta,
            // Auth
            auth_dtos::LoginRequestDto,
            auth_dtos::LoginResponseDto,
            auth_dtos::LogoutResponseDto,
            ApiResponse<auth_dtos::LoginResponseDto>,
            ApiResponse<auth_dtos::LogoutResponseDto>,
            // Phones
            phones_dtos::PhoneResponseDto,
            phones_dtos::CreatePhoneForm,
            ApiResponse<phones_dtos::PhoneResponseDto>,
            ApiResponse<Vec<phones_dtos::PhoneResponseDto>>,
            // Designs
            designs_dtos::DesignResponseDto,
            designs_dtos::CreateDesignForm,
            ApiResponse<designs_dtos::DesignResponseDto>,
            ApiResponse<Vec<designs_dtos::DesignResponseDto>>,
            // Videos
            videos_dtos::VideoResponseDto,
            videos_dtos::CreateVideoForm,
            ApiResponse<videos_dtos::VideoResponseDto>,
            ApiResponse<Vec<videos_dtos::VideoResponseDto>>,
            // About
            about_dtos::AboutResponseDto,
            about_dtos::UpdateAboutForm,
            ApiResponse<about_dtos::AboutResponseDto>,
            // Search
            search_dtos::SearchResultsDto,
            ApiResponse<search_dtos::SearchResultsDto>,
            // Dashboard
            dashboard_dtos::DashboardOverviewDto,
            ApiResponse<dashboard_dtos::DashboardOverviewDto>,
        )
    ),
    tags(
        (name = "auth", description = "Admin login and logout"),
        (name = "phones", description = "Phone catalog"),
        (name = "designs", description = "Design catalog"),
        (name = "videos", description = "Video catalog"),
        (name = "about", description = "About page content"),
        (name = "search", description = "Substring search over phones and designs"),
        (name = "dashboard", description = "Admin dashboard"),
    ),
    modifiers(&SecurityAddon),
    info(
        title = "Portfolio API",
        version = "0.1.0",
        description = "Portfolio catalog and upload API",
    )
)]
pub struct ApiDoc;

/// Adds Bearer JWT security scheme to OpenAPI spec
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
