use axum::{extract::State, Json};
use serde::Serialize;

use super::{with_site, PageContext};
use crate::db::or_default;
use crate::errors::AppError;
use crate::media::MediaStore;
use crate::models::blog::BlogPostView;
use crate::models::education::{CertificationView, EducationView};
use crate::models::experience::ExperienceView;
use crate::models::project::ProjectView;
use crate::models::skill::SkillGroup;
use crate::models::testimonial::TestimonialView;
use crate::state::AppState;
use crate::{blog, education, experience, projects, skills, testimonials};

const FEATURED_PROJECTS: i64 = 6;
const RECENT_EXPERIENCE: i64 = 5;
const RECENT_CERTIFICATIONS: i64 = 6;
const FEATURED_POSTS: i64 = 3;

#[derive(Debug, Serialize)]
pub struct LandingPage {
    pub skills_by_category: Vec<SkillGroup>,
    pub featured_projects: Vec<ProjectView>,
    pub experiences: Vec<ExperienceView>,
    pub education: Vec<EducationView>,
    pub certifications: Vec<CertificationView>,
    pub testimonials: Vec<TestimonialView>,
    pub featured_posts: Vec<BlogPostView>,
}

#[derive(Debug, Serialize)]
pub struct AboutPage {
    pub skills_by_category: Vec<SkillGroup>,
    pub experiences: Vec<ExperienceView>,
    pub education: Vec<EducationView>,
    pub certifications: Vec<CertificationView>,
}

fn views<R, V>(
    rows: Vec<R>,
    media: &dyn MediaStore,
    view: fn(R, &dyn MediaStore) -> V,
) -> Vec<V> {
    rows.into_iter().map(|row| view(row, media)).collect()
}

async fn skill_groups(state: &AppState) -> Vec<SkillGroup> {
    let db = &state.db;
    let rows = or_default(db, skills::store::TABLE, skills::store::list_active(db)).await;
    skills::store::group_by_category(rows)
}

/// GET /api/v1/pages/landing
pub async fn handle_landing(
    State(state): State<AppState>,
) -> Result<Json<PageContext<LandingPage>>, AppError> {
    let db = &state.db;
    let media = state.media.as_ref();

    let project_rows = or_default(
        db,
        projects::store::TABLE,
        projects::store::list_featured(db, FEATURED_PROJECTS),
    )
    .await;
    let experiences = or_default(
        db,
        experience::store::TABLE,
        experience::store::list_visible(db, Some(RECENT_EXPERIENCE)),
    )
    .await;
    let education_rows = or_default(
        db,
        education::store::EDUCATION_TABLE,
        education::store::list_visible_education(db),
    )
    .await;
    let certifications = or_default(
        db,
        education::store::CERTIFICATIONS_TABLE,
        education::store::list_visible_certifications(db, Some(RECENT_CERTIFICATIONS)),
    )
    .await;
    let testimonial_rows = or_default(
        db,
        testimonials::store::TABLE,
        testimonials::store::list_featured_approved(db),
    )
    .await;
    let posts = or_default(
        db,
        blog::store::TABLE,
        blog::store::list_featured(db, FEATURED_POSTS),
    )
    .await;

    let body = LandingPage {
        skills_by_category: skill_groups(&state).await,
        featured_projects: views(project_rows, media, ProjectView::new),
        experiences: views(experiences, media, ExperienceView::new),
        education: views(education_rows, media, EducationView::new),
        certifications: views(certifications, media, CertificationView::new),
        testimonials: views(testimonial_rows, media, TestimonialView::new),
        featured_posts: views(posts, media, BlogPostView::new),
    };
    Ok(Json(with_site(&state, body).await))
}

/// GET /api/v1/pages/about
pub async fn handle_about(
    State(state): State<AppState>,
) -> Result<Json<PageContext<AboutPage>>, AppError> {
    let db = &state.db;
    let media = state.media.as_ref();

    let experiences = or_default(
        db,
        experience::store::TABLE,
        experience::store::list_visible(db, None),
    )
    .await;
    let education_rows = or_default(
        db,
        education::store::EDUCATION_TABLE,
        education::store::list_visible_education(db),
    )
    .await;
    let certifications = or_default(
        db,
        education::store::CERTIFICATIONS_TABLE,
        education::store::list_visible_certifications(db, None),
    )
    .await;

    let body = AboutPage {
        skills_by_category: skill_groups(&state).await,
        experiences: views(experiences, media, ExperienceView::new),
        education: views(education_rows, media, EducationView::new),
        certifications: views(certifications, media, CertificationView::new),
    };
    Ok(Json(with_site(&state, body).await))
}
