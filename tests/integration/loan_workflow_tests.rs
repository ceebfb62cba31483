//! Loan workflow tests against PostgreSQL (DATABASE_URL).
//! Run with: cargo test -- --ignored

mod common;

use biblioteca_server::{
    config::AppConfig,
    error::AppError,
    models::{book::CreateBook, loan::CreateLoan, user::CreateUser, BookQuery},
    services::Services,
    AppState,
};
use serial_test::serial;

async fn seed_book_and_user(state: &AppState) -> (i32, i32) {
    let book = state
        .services
        .catalog
        .create_book(CreateBook {
            titulo: "X".to_string(),
            autor: "Y".to_string(),
            ano_publicacao: 2020,
            genero: "Z".to_string(),
        })
        .await
        .expect("Failed to create book");

    let user = state
        .services
        .users
        .create_user(CreateUser {
            nome: "Ana".to_string(),
            email: "ana@example.com".to_string(),
        })
        .await
        .expect("Failed to create user");

    (book.id, user.id)
}

fn loan(livro_id: i32, usuario_id: i32) -> CreateLoan {
    CreateLoan {
        livro_id,
        usuario_id,
    }
}

#[tokio::test]
#[ignore]
#[serial]
async fn test_register_loan_flips_flags_and_sets_due_date() {
    let (state, _pool) = common::setup_state(AppConfig::default()).await;
    let (book_id, user_id) = seed_book_and_user(&state).await;
    let services = &state.services;

    let created = services
        .loans
        .register_loan(loan(book_id, user_id))
        .await
        .expect("Loan should succeed");

    assert!(created.is_open());
    assert_eq!(
        (created.data_prevista_devolucao - created.data_emprestimo).num_days(),
        14
    );

    let book = services.catalog.get_book(book_id).await.unwrap();
    assert!(!book.disponivel);
    assert!(book.emprestado);
    assert!(services.loans.is_loaned(book_id).await.unwrap());

    let second = services.loans.register_loan(loan(book_id, user_id)).await;
    assert!(matches!(second, Err(AppError::Conflict(_))));
}

#[tokio::test]
#[ignore]
#[serial]
async fn test_concurrent_registrations_have_one_winner() {
    let (state, pool) = common::setup_state(AppConfig::default()).await;
    let (book_id, user_id) = seed_book_and_user(&state).await;

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let services: Services = (*state.services).clone();
            tokio::spawn(async move { services.loans.register_loan(loan(book_id, user_id)).await })
        })
        .collect();

    let mut successes = 0;
    let mut conflicts = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => successes += 1,
            Err(AppError::Conflict(_)) => conflicts += 1,
            Err(e) => panic!("Unexpected error: {}", e),
        }
    }

    assert_eq!(successes, 1);
    assert_eq!(conflicts, 7);

    let open: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM emprestimos WHERE livro_id = $1")
        .bind(book_id)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(open, 1);
}

#[tokio::test]
#[ignore]
#[serial]
async fn test_return_is_idempotent() {
    let (state, _pool) = common::setup_state(AppConfig::default()).await;
    let (book_id, user_id) = seed_book_and_user(&state).await;
    let services = &state.services;

    let created = services.loans.register_loan(loan(book_id, user_id)).await.unwrap();

    services.loans.register_return(created.id).await.expect("First return succeeds");

    let returned = services.loans.get_by_id(created.id).await.unwrap();
    let returned_at = returned.data_devolucao.expect("Return date set");

    let again = services.loans.register_return(created.id).await;
    assert!(matches!(again, Err(AppError::NotFound(_))));

    // The first return date is kept
    let after = services.loans.get_by_id(created.id).await.unwrap();
    assert_eq!(after.data_devolucao, Some(returned_at));

    assert!(!services.loans.is_loaned(book_id).await.unwrap());
}

#[tokio::test]
#[ignore]
#[serial]
async fn test_return_of_unknown_loan() {
    let (state, _pool) = common::setup_state(AppConfig::default()).await;

    let result = state.services.loans.register_return(42).await;
    assert!(matches!(result, Err(AppError::NotFound(_))));
}

#[tokio::test]
#[ignore]
#[serial]
async fn test_returned_book_stays_unavailable_by_default() {
    let (state, _pool) = common::setup_state(AppConfig::default()).await;
    let (book_id, user_id) = seed_book_and_user(&state).await;
    let services = &state.services;

    let created = services.loans.register_loan(loan(book_id, user_id)).await.unwrap();
    services.loans.register_return(created.id).await.unwrap();

    let book = services.catalog.get_book(book_id).await.unwrap();
    assert!(!book.disponivel);
    assert!(book.emprestado);

    // Flags still block a new loan
    let again = services.loans.register_loan(loan(book_id, user_id)).await;
    assert!(matches!(again, Err(AppError::Conflict(_))));
}

#[tokio::test]
#[ignore]
#[serial]
async fn test_return_restores_availability_when_configured() {
    let mut config = AppConfig::default();
    config.loans.restore_availability_on_return = true;
    let (state, _pool) = common::setup_state(config).await;
    let (book_id, user_id) = seed_book_and_user(&state).await;
    let services = &state.services;

    let created = services.loans.register_loan(loan(book_id, user_id)).await.unwrap();
    services.loans.register_return(created.id).await.unwrap();

    let book = services.catalog.get_book(book_id).await.unwrap();
    assert!(book.disponivel);
    assert!(!book.emprestado);

    services
        .loans
        .register_loan(loan(book_id, user_id))
        .await
        .expect("Book can be loaned again");
}

#[tokio::test]
#[ignore]
#[serial]
async fn test_delete_conflicts_on_open_loan_whatever_the_flags() {
    let (state, pool) = common::setup_state(AppConfig::default()).await;
    let (book_id, user_id) = seed_book_and_user(&state).await;
    let services = &state.services;

    services.loans.register_loan(loan(book_id, user_id)).await.unwrap();

    for (disponivel, emprestado) in [(true, false), (false, true), (true, true), (false, false)] {
        common::set_book_flags(&pool, book_id, disponivel, emprestado).await;
        let result = services.catalog.delete_book(book_id).await;
        assert!(
            matches!(result, Err(AppError::Conflict(_))),
            "flags ({}, {}) should not allow deletion",
            disponivel,
            emprestado
        );
    }
}

#[tokio::test]
#[ignore]
#[serial]
async fn test_is_loaned_ignores_book_flags() {
    let (state, pool) = common::setup_state(AppConfig::default()).await;
    let (book_id, _user_id) = seed_book_and_user(&state).await;

    common::set_book_flags(&pool, book_id, false, true).await;

    assert!(!state.services.loans.is_loaned(book_id).await.unwrap());
    state
        .services
        .catalog
        .delete_book(book_id)
        .await
        .expect("No open loan, deletion allowed");
}

#[tokio::test]
#[ignore]
#[serial]
async fn test_unfiltered_search_matches_list() {
    let (state, _pool) = common::setup_state(AppConfig::default()).await;
    seed_book_and_user(&state).await;
    seed_book_and_user(&state).await;

    let all = state.services.catalog.list_books().await.unwrap();
    let searched = state
        .services
        .catalog
        .search_books(&BookQuery::default())
        .await
        .unwrap();

    assert_eq!(all, searched);
    assert_eq!(searched.len(), 2);
}
