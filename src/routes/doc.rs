use utoipa::{OpenApi, openapi::OpenApi as OpenApiSpec};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        characters::{CharacterList, CreateCharacterRequest, UpdateCharacterRequest},
        favorites::{AddFavoriteRequest, FavoriteList},
        films::FilmList,
        planets::PlanetList,
        users::{CreateUserRequest, UserList},
    },
    models::{Character, Favorite, Film, Planet, User},
    response::{ApiResponse, Meta},
    routes::{characters, favorites, films, health, planets, sitemap, users},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        sitemap::sitemap,
        health::health_check,
        users::create_user,
        users::list_users,
        users::get_user,
        favorites::list_user_favorites,
        characters::list_characters,
        characters::get_character,
        characters::create_character,
        characters::update_character,
        planets::list_planets,
        planets::get_planet,
        films::list_films,
        films::get_film,
        favorites::add_favorite,
        favorites::remove_favorite
    ),
    components(
        schemas(
            User,
            Character,
            Planet,
            Film,
            Favorite,
            CreateUserRequest,
            CreateCharacterRequest,
            UpdateCharacterRequest,
            AddFavoriteRequest,
            UserList,
            CharacterList,
            PlanetList,
            FilmList,
            FavoriteList,
            sitemap::Sitemap,
            Meta,
            ApiResponse<User>,
            ApiResponse<Character>,
            ApiResponse<Favorite>,
            ApiResponse<FavoriteList>
        )
    ),
    tags(
        (name = "Health", description = "Health check and sitemap"),
        (name = "Users", description = "User endpoints"),
        (name = "Characters", description = "Character endpoints"),
        (name = "Planets", description = "Planet endpoints"),
        (name = "Films", description = "Film endpoints"),
        (name = "Favorites", description = "Favorite endpoints"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
