//! Recommendation orchestrator: builds the context exactly once per call and
//! hands the same snapshot to every domain recommender and the notification
//! rules, so one request is internally consistent.

use nanoid::nanoid;

use super::{clothing, experience, food, notify, photo};
use crate::catalog::CATALOG_VERSION;
use crate::config::Config;
use crate::context::{build_context, Clock, StaticWeatherTable, SystemClock, WeatherProvider};
use crate::error::Result;
use crate::models::{
    ClothingRecommendations, Context, ExperienceRecommendations, FoodRecommendations,
    PhotoRecommendations, RecommendationResult, RecommendationSets, Trip, UserPreferences,
};

pub struct RecommendationEngine {
    clock: Box<dyn Clock>,
    weather: Box<dyn WeatherProvider>,
}

impl RecommendationEngine {
    pub fn new(clock: Box<dyn Clock>, weather: Box<dyn WeatherProvider>) -> Self {
        Self { clock, weather }
    }

    /// Engine with the system clock and the static weather table seeded from
    /// config defaults.
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            Box::new(SystemClock),
            Box::new(StaticWeatherTable::from_config(&config.weather)),
        )
    }

    /// Full recommendation pass. Fails only on caller-contract violations;
    /// the recommenders themselves are total over any valid context.
    pub fn generate(
        &self,
        trip: &Trip,
        preferences: &UserPreferences,
    ) -> Result<RecommendationResult> {
        let context = self.context_for(trip, preferences)?;

        tracing::info!(
            destination = %context.destination,
            travel_group = %context.travel_group,
            season = %context.season,
            time_of_day = %context.time_of_day,
            "generating recommendations"
        );

        let recommendations = RecommendationSets {
            clothing: clothing::recommend(&context),
            food: food::recommend(&context),
            experiences: experience::recommend(&context),
            photos: photo::recommend(&context),
        };
        let notifications = notify::derive_notifications(&context);

        Ok(RecommendationResult {
            id: nanoid!(),
            catalog_version: CATALOG_VERSION.to_string(),
            context,
            recommendations,
            notifications,
            generated_at: self.clock.now(),
        })
    }

    pub fn clothing_for(
        &self,
        trip: &Trip,
        preferences: &UserPreferences,
    ) -> Result<ClothingRecommendations> {
        Ok(clothing::recommend(&self.context_for(trip, preferences)?))
    }

    pub fn food_for(
        &self,
        trip: &Trip,
        preferences: &UserPreferences,
    ) -> Result<FoodRecommendations> {
        Ok(food::recommend(&self.context_for(trip, preferences)?))
    }

    pub fn experiences_for(
        &self,
        trip: &Trip,
        preferences: &UserPreferences,
    ) -> Result<ExperienceRecommendations> {
        Ok(experience::recommend(&self.context_for(trip, preferences)?))
    }

    pub fn photos_for(
        &self,
        trip: &Trip,
        preferences: &UserPreferences,
    ) -> Result<PhotoRecommendations> {
        Ok(photo::recommend(&self.context_for(trip, preferences)?))
    }

    fn context_for(&self, trip: &Trip, preferences: &UserPreferences) -> Result<Context> {
        build_context(trip, preferences, self.clock.as_ref(), self.weather.as_ref())
    }
}
