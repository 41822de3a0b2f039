use crate::api;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        api::health::health_check,
        api::items::list_items,
        api::items::get_item,
        api::items::quote_item,
        api::items::item_calendar,
        api::bookings::create_booking,
        api::rentals::list_rentals,
        api::rentals::get_rental,
        api::rentals::rental_board,
        api::rentals::update_rental_status,
    ),
    components(
        schemas(
            // Response envelopes are ad-hoc json!, documented per path
        )
    ),
    tags(
        (name = "rentkart", description = "RentKart API")
    )
)]
pub struct ApiDoc;
