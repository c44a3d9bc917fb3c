//! PostgreSQL DAO tests. Each test gets a fresh database with the crate's
//! migrations applied. They need a reachable server:
//!
//! `DATABASE_URL=postgres://... cargo test -p database -- --ignored`

use core_types::{PageRequest, Potion, Qualite, Sort};
use database::{CrudRepository, PagingRepository, PgPotionDao, PgQualiteDao};
use sqlx::PgPool;

fn flamme() -> Potion {
    Potion::new("Flamme", "Rouge vif", "Brûle l'ennemi", 10)
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn insert_then_update_in_place(pool: PgPool) {
    let dao = PgPotionDao::new(pool);

    let mut saved = dao.save(flamme()).await.unwrap();
    let id = saved.id.expect("store assigns an id");
    assert_eq!(saved.effect_description, "Brûle l'ennemi");

    saved.name = "Flamme+".to_string();
    saved.heal_amount = 20;
    let updated = dao.save(saved).await.unwrap();

    assert_eq!(updated.id, Some(id));
    assert_eq!(dao.count().await.unwrap(), 1);
    let stored = dao.get(id).await.unwrap();
    assert_eq!(stored.name, "Flamme+");
    assert_eq!(stored.heal_amount, 20);
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn save_with_vanished_id_inserts_fresh_row(pool: PgPool) {
    let dao = PgPotionDao::new(pool);

    let first = dao.save(flamme()).await.unwrap();
    let first_id = first.id.unwrap();
    assert!(dao.delete(first_id).await.unwrap());

    let revived = dao.save(first).await.unwrap();
    let revived_id = revived.id.unwrap();
    assert_ne!(revived_id, first_id);
    assert!(dao.find_by_id(first_id).await.unwrap().is_none());
    assert_eq!(dao.get(revived_id).await.unwrap().name, "Flamme");
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn find_all_is_ordered_by_id_and_delete_is_reported(pool: PgPool) {
    let dao = PgPotionDao::new(pool);
    dao.save(flamme()).await.unwrap();
    dao.save(Potion::new("Glace", "", "", 5)).await.unwrap();

    let names: Vec<_> = dao.find_all().await.unwrap().into_iter().map(|p| p.name).collect();
    assert_eq!(names, vec!["Flamme", "Glace"]);
    assert!(!dao.delete(i64::MAX).await.unwrap());
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn qualite_page_sorted_by_colour(pool: PgPool) {
    let dao = PgQualiteDao::new(pool);

    let request = PageRequest::new(1, 2).unwrap().with_sort(Sort::desc("colour"));
    let page = dao.find_page(&request).await.unwrap();

    assert_eq!(page.total_elements, 4);
    assert_eq!(page.total_pages, 2);
    assert!(page.last);
    let colours: Vec<_> = page.content.iter().map(|q| q.colour.as_str()).collect();
    assert_eq!(colours, vec!["#9d9d9d", "#0070dd"]);
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn qualite_page_rejects_unknown_sort(pool: PgPool) {
    let dao = PgQualiteDao::new(pool);
    dao.save(Qualite::new("Mythique", "#e6cc80")).await.unwrap();

    let request = PageRequest::new(0, 10).unwrap().with_sort(Sort::asc("name; DROP TABLE qualites"));
    assert!(dao.find_page(&request).await.is_err());
    assert_eq!(dao.count().await.unwrap(), 5);
}
