//! Properties that hold across inputs: determinism and insensitivity to
//! layout, comments and keyword case.

mod common;
use common::*;

const SAMPLES: &[&str] = &[
    "select * from test",
    "select distinct a, b as x from s.t u where a > 1 order by b desc limit 3",
    "select d.id from (select id from test) d join e on d.id = e.id",
    "select count(*) from t group by (a, b) having count(*) > 2",
    "select case when a is null then 'x' else a::text end from t offset 2",
];

#[test]
fn parsing_is_deterministic() {
    for sql in SAMPLES {
        assert_eq!(parse_select(sql), parse_select(sql), "for: {sql}");
        assert_eq!(json(sql), json(sql), "for: {sql}");
    }
}

#[test]
fn free_function_matches_parser() {
    for sql in SAMPLES {
        let via_fn = pgselect_core::parse_select(sql)
            .unwrap_or_else(|e| panic!("Failed to parse: {sql}\nError: {e}"));
        assert_eq!(via_fn, parse_select(sql), "for: {sql}");
    }
}

#[test]
fn whitespace_is_insignificant() {
    assert_same("select * from test", "select*from\"test\"");
    assert_same("select a,b from t", "  select\n\ta ,\tb\r\nfrom   t  ");
    assert_same(
        "select a from t where a = 1",
        "select a\nfrom t\nwhere a=1",
    );
}

#[test]
fn comments_are_whitespace() {
    assert_same("select a from t", "select a -- first column\nfrom /* the table */ t");
    assert_same("select a from t", "/* leading */ select a from t -- trailing");
    assert_same("select 1", "select 1; -- done");
}

#[test]
fn keywords_are_case_insensitive() {
    assert_same(
        "select a from t where a is not null order by a desc",
        "SeLeCt a FrOm t WHERE a IS NOT NULL ORDER BY a DESC",
    );
    assert_same(
        "select * from a left outer join b on true",
        "SELECT * FROM a LEFT OUTER JOIN b ON TRUE",
    );
}

#[test]
fn trailing_semicolon_is_optional() {
    for sql in SAMPLES {
        assert_same(sql, &format!("{sql};"));
    }
}
