// tests/comment_moderation.rs
use folio_cms::application::{
    commands::{
        comments::{AddCommentCommand, ModerateCommentsCommand},
        content::CreateContentCommand,
    },
    dto::ContentDto,
    error::ApplicationError,
    services::ServiceSettings,
};

mod support;

use support::{TestApp, admin, author, viewer};

async fn published_content(app: &TestApp) -> ContentDto {
    let news = app.store.add_category("News", "news");
    let command = CreateContentCommand::builder()
        .title("Open for discussion")
        .body("A body that is comfortably long enough.")
        .category(news.id.0)
        .publish(true)
        .build();
    app.services
        .content_commands
        .create_content(&author(), command)
        .await
        .unwrap()
}

fn comment(slug: &str, body: &str) -> AddCommentCommand {
    AddCommentCommand {
        slug: slug.into(),
        body: body.into(),
    }
}

#[tokio::test]
async fn comments_shorter_than_five_characters_are_rejected() {
    let app = TestApp::new();
    let content = published_content(&app).await;

    let err = app
        .services
        .comment_commands
        .add_comment(&viewer(), comment(&content.slug, "Hi"))
        .await
        .unwrap_err();

    match err {
        ApplicationError::Form(fields) => assert!(fields.contains("body")),
        other => panic!("expected a form error, got {other:?}"),
    }
    assert_eq!(app.store.comment_count(), 0);
}

#[tokio::test]
async fn pending_comments_stay_hidden_until_approved() {
    let app = TestApp::new();
    let content = published_content(&app).await;
    let created = app
        .services
        .comment_commands
        .add_comment(&viewer(), comment(&content.slug, "Thoughtful remark"))
        .await
        .unwrap();
    assert!(!created.is_approved);

    let detail = app
        .services
        .content_queries
        .detail(None, &content.slug)
        .await
        .unwrap();
    assert!(detail.comments.is_empty());

    let pending = app.services.comment_queries.pending(&admin()).await.unwrap();
    assert_eq!(pending.len(), 1);

    let result = app
        .services
        .comment_commands
        .moderate(
            &admin(),
            ModerateCommentsCommand {
                ids: vec![created.id],
                approve: true,
            },
        )
        .await
        .unwrap();
    assert_eq!(result.updated, 1);

    let detail = app
        .services
        .content_queries
        .detail(None, &content.slug)
        .await
        .unwrap();
    assert_eq!(detail.comments.len(), 1);
    assert_eq!(detail.comments[0].body, "Thoughtful remark");
    assert!(app.services.comment_queries.pending(&admin()).await.unwrap().is_empty());
}

#[tokio::test]
async fn approving_twice_touches_nothing_the_second_time() {
    let app = TestApp::new();
    let content = published_content(&app).await;
    let created = app
        .services
        .comment_commands
        .add_comment(&viewer(), comment(&content.slug, "Approve me please"))
        .await
        .unwrap();
    let approve = || ModerateCommentsCommand {
        ids: vec![created.id],
        approve: true,
    };

    let commands = &app.services.comment_commands;
    assert_eq!(commands.moderate(&admin(), approve()).await.unwrap().updated, 1);
    assert_eq!(commands.moderate(&admin(), approve()).await.unwrap().updated, 0);

    let unapprove = commands
        .moderate(
            &admin(),
            ModerateCommentsCommand {
                ids: vec![created.id],
                approve: false,
            },
        )
        .await
        .unwrap();
    assert_eq!(unapprove.updated, 1);
    let detail = app
        .services
        .content_queries
        .detail(None, &content.slug)
        .await
        .unwrap();
    assert!(detail.comments.is_empty());
}

#[tokio::test]
async fn moderation_needs_the_moderate_capability() {
    let app = TestApp::new();
    let content = published_content(&app).await;
    let created = app
        .services
        .comment_commands
        .add_comment(&viewer(), comment(&content.slug, "Can I approve myself?"))
        .await
        .unwrap();

    let err = app
        .services
        .comment_commands
        .moderate(
            &author(),
            ModerateCommentsCommand {
                ids: vec![created.id],
                approve: true,
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Forbidden(_)));

    let pending = app.services.comment_queries.pending(&viewer()).await.unwrap_err();
    assert!(matches!(pending, ApplicationError::Forbidden(_)));
}

#[tokio::test]
async fn without_moderation_comments_appear_immediately() {
    let app = TestApp::with_settings(ServiceSettings {
        comments_require_moderation: false,
        ..ServiceSettings::default()
    });
    let content = published_content(&app).await;

    let created = app
        .services
        .comment_commands
        .add_comment(&viewer(), comment(&content.slug, "Straight through"))
        .await
        .unwrap();
    assert!(created.is_approved);

    let detail = app
        .services
        .content_queries
        .detail(None, &content.slug)
        .await
        .unwrap();
    assert_eq!(detail.comments.len(), 1);
}

#[tokio::test]
async fn drafts_cannot_be_commented_on_by_readers() {
    let app = TestApp::new();
    let news = app.store.add_category("News", "news");
    let draft = app
        .services
        .content_commands
        .create_content(
            &author(),
            CreateContentCommand::builder()
                .title("Not yet")
                .body("A body that is comfortably long enough.")
                .category(news.id.0)
                .build(),
        )
        .await
        .unwrap();

    let err = app
        .services
        .comment_commands
        .add_comment(&viewer(), comment(&draft.slug, "Sneaky early comment"))
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::NotFound(_)));
}
