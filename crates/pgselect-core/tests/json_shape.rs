//! Serialized AST shapes for the canonical SELECT forms.

mod common;
use common::*;

use serde_json::{json, Value};

fn check(sqls: &[&str], expected: &Value) {
    for sql in sqls {
        assert_eq!(&json(sql), expected, "JSON mismatch for: {sql}");
    }
}

fn star() -> Value {
    json!([{ "expr": { "type": "ref", "name": "*" } }])
}

#[test]
fn bare_select() {
    check(&["select"], &json!({ "type": "select" }));
}

#[test]
fn integer_column() {
    check(
        &["select 42", "select(42)"],
        &json!({
            "type": "select",
            "columns": [{ "expr": { "type": "integer", "value": 42 } }],
        }),
    );
}

#[test]
fn count_star() {
    check(
        &["select count(*)"],
        &json!({
            "type": "select",
            "columns": [{
                "expr": {
                    "type": "call",
                    "function": "count",
                    "args": [{ "type": "ref", "name": "*" }],
                },
            }],
        }),
    );
}

#[test]
fn two_integer_columns() {
    check(
        &["select 42, 53", "select 42,53", "select(42),53"],
        &json!({
            "type": "select",
            "columns": [
                { "expr": { "type": "integer", "value": 42 } },
                { "expr": { "type": "integer", "value": 53 } },
            ],
        }),
    );
}

#[test]
fn star_from_table_without_whitespace() {
    check(
        &[
            "select * from test",
            "select*from\"test\"",
            "select* from\"test\"",
            "select *from\"test\"",
            "select*from \"test\"",
            "select * from \"test\"",
        ],
        &json!({
            "type": "select",
            "columns": star(),
            "from": [{ "type": "table", "name": "test" }],
        }),
    );
}

#[test]
fn table_function_syntax() {
    check(
        &["select * from current_schema()", "select * from current_schema ( )"],
        &json!({
            "type": "select",
            "columns": star(),
            "from": [{ "type": "table", "name": "current_schema" }],
        }),
    );
}

#[test]
fn column_aliases() {
    check(
        &[
            "select a as a1, b as b1 from test",
            "select a a1,b b1 from test",
            "select a a1 ,b b1 from test",
        ],
        &json!({
            "type": "select",
            "columns": [
                { "expr": { "type": "ref", "name": "a" }, "alias": "a1" },
                { "expr": { "type": "ref", "name": "b" }, "alias": "b1" },
            ],
            "from": [{ "type": "table", "name": "test" }],
        }),
    );
}

#[test]
fn schema_qualified_table() {
    check(
        &["select * from db.test"],
        &json!({
            "type": "select",
            "columns": star(),
            "from": [{ "type": "table", "name": "test", "schema": "db" }],
        }),
    );
}

#[test]
fn limit_spellings() {
    check(
        &[
            "select * from test limit 5",
            "select * from test fetch first 5",
            "select * from test fetch next 5 rows",
        ],
        &json!({
            "type": "select",
            "columns": star(),
            "from": [{ "type": "table", "name": "test" }],
            "limit": { "limit": 5 },
        }),
    );
}

#[test]
fn limit_zero_is_kept() {
    check(
        &["select * from test limit 0"],
        &json!({
            "type": "select",
            "columns": star(),
            "from": [{ "type": "table", "name": "test" }],
            "limit": { "limit": 0 },
        }),
    );
}

#[test]
fn limit_and_offset() {
    check(
        &[
            "select * from test limit 5 offset 3",
            "select * from test offset 3 rows fetch first 5",
        ],
        &json!({
            "type": "select",
            "columns": star(),
            "from": [{ "type": "table", "name": "test" }],
            "limit": { "limit": 5, "offset": 3 },
        }),
    );
}

#[test]
fn offset_only() {
    check(
        &["select * from test offset 3", "select * from test offset 3 rows"],
        &json!({
            "type": "select",
            "columns": star(),
            "from": [{ "type": "table", "name": "test" }],
            "limit": { "offset": 3 },
        }),
    );
}

#[test]
fn order_by_defaults_to_asc() {
    check(
        &[
            "select * from test order by a asc limit 3",
            "select * from test order by a limit 3",
        ],
        &json!({
            "type": "select",
            "columns": star(),
            "from": [{ "type": "table", "name": "test" }],
            "orderBy": [{ "by": { "type": "ref", "name": "a" }, "order": "ASC" }],
            "limit": { "limit": 3 },
        }),
    );
}

#[test]
fn order_by_mixed_directions() {
    check(
        &["select * from test order by a asc, b desc"],
        &json!({
            "type": "select",
            "columns": star(),
            "from": [{ "type": "table", "name": "test" }],
            "orderBy": [
                { "by": { "type": "ref", "name": "a" }, "order": "ASC" },
                { "by": { "type": "ref", "name": "b" }, "order": "DESC" },
            ],
        }),
    );
}

#[test]
fn qualified_wildcards() {
    check(
        &["select a.*, b.*"],
        &json!({
            "type": "select",
            "columns": [
                { "expr": { "type": "ref", "table": "a", "name": "*" } },
                { "expr": { "type": "ref", "table": "b", "name": "*" } },
            ],
        }),
    );
}

#[test]
fn table_alias_spellings() {
    check(
        &[
            "select * from test a where a.b > 42",
            "select*from test\"a\"where a.b > 42",
            "select*from test as\"a\"where a.b > 42",
            "select*from test as a where a.b > 42",
        ],
        &json!({
            "type": "select",
            "columns": star(),
            "from": [{ "type": "table", "name": "test", "alias": "a" }],
            "where": {
                "type": "binary",
                "op": ">",
                "left": { "type": "ref", "table": "a", "name": "b" },
                "right": { "type": "integer", "value": 42 },
            },
        }),
    );
}

#[test]
fn derived_table() {
    check(
        &["select * from (select id from test) d"],
        &json!({
            "type": "select",
            "columns": star(),
            "from": [{
                "type": "statement",
                "statement": {
                    "type": "select",
                    "columns": [{ "expr": { "type": "ref", "name": "id" } }],
                    "from": [{ "type": "table", "name": "test" }],
                },
                "alias": "d",
            }],
        }),
    );
}

#[test]
fn group_by_parenthesized() {
    check(
        &["select * from test group by grp", "select * from test group by (grp)"],
        &json!({
            "type": "select",
            "columns": star(),
            "from": [{ "type": "table", "name": "test" }],
            "groupBy": [{ "type": "ref", "name": "grp" }],
        }),
    );
    check(
        &["select * from test group by a,b", "select * from test group by (a,b)"],
        &json!({
            "type": "select",
            "columns": star(),
            "from": [{ "type": "table", "name": "test" }],
            "groupBy": [{ "type": "ref", "name": "a" }, { "type": "ref", "name": "b" }],
        }),
    );
}

fn join_of(kind: &str) -> Value {
    json!({
        "type": "select",
        "columns": star(),
        "from": [
            { "type": "table", "name": "ta" },
            {
                "type": "table",
                "name": "tb",
                "join": {
                    "type": kind,
                    "on": {
                        "type": "binary",
                        "op": "=",
                        "left": { "type": "ref", "table": "ta", "name": "id" },
                        "right": { "type": "ref", "table": "tb", "name": "id" },
                    },
                },
            },
        ],
    })
}

#[test]
fn join_kinds() {
    check(
        &[
            "select * from ta join tb on ta.id=tb.id",
            "select * from ta inner join tb on ta.id=tb.id",
        ],
        &join_of("INNER JOIN"),
    );
    check(
        &[
            "select * from ta left join tb on ta.id=tb.id",
            "select * from ta left outer join tb on ta.id=tb.id",
        ],
        &join_of("LEFT JOIN"),
    );
    check(
        &[
            "select * from ta right join tb on ta.id=tb.id",
            "select * from ta right outer join tb on ta.id=tb.id",
        ],
        &join_of("RIGHT JOIN"),
    );
    check(
        &[
            "select * from ta full join tb on ta.id=tb.id",
            "select * from ta full outer join tb on ta.id=tb.id",
        ],
        &join_of("FULL JOIN"),
    );
}

#[test]
fn keyword_function_call() {
    check(
        &["select current_schema()"],
        &json!({
            "type": "select",
            "columns": [{
                "expr": {
                    "type": "call",
                    "function": { "type": "keyword", "keyword": "current_schema" },
                    "args": [],
                },
            }],
        }),
    );
}

#[test]
fn cast_to_multi_word_type() {
    check(
        &["select now()::time without time zone"],
        &json!({
            "type": "select",
            "columns": [{
                "expr": {
                    "type": "cast",
                    "operand": { "type": "call", "function": "now", "args": [] },
                    "to": { "type": "time without time zone" },
                },
            }],
        }),
    );
}

#[test]
fn distinct_and_having() {
    check(
        &["select distinct a from t group by a having a > 1"],
        &json!({
            "type": "select",
            "distinct": true,
            "columns": [{ "expr": { "type": "ref", "name": "a" } }],
            "from": [{ "type": "table", "name": "t" }],
            "groupBy": [{ "type": "ref", "name": "a" }],
            "having": {
                "type": "binary",
                "op": ">",
                "left": { "type": "ref", "name": "a" },
                "right": { "type": "integer", "value": 1 },
            },
        }),
    );
}

#[test]
fn other_expression_shapes() {
    check(
        &["select a between 1 and 2, b in ('x'), -c, $1, null, true, 1.5"],
        &json!({
            "type": "select",
            "columns": [
                {
                    "expr": {
                        "type": "ternary",
                        "op": "BETWEEN",
                        "value": { "type": "ref", "name": "a" },
                        "lo": { "type": "integer", "value": 1 },
                        "hi": { "type": "integer", "value": 2 },
                    },
                },
                {
                    "expr": {
                        "type": "binary",
                        "op": "IN",
                        "left": { "type": "ref", "name": "b" },
                        "right": {
                            "type": "list",
                            "expressions": [{ "type": "string", "value": "x" }],
                        },
                    },
                },
                {
                    "expr": {
                        "type": "unary",
                        "op": "-",
                        "operand": { "type": "ref", "name": "c" },
                    },
                },
                { "expr": { "type": "parameter", "name": "$1" } },
                { "expr": { "type": "null" } },
                { "expr": { "type": "boolean", "value": true } },
                { "expr": { "type": "numeric", "value": 1.5 } },
            ],
        }),
    );
}

#[test]
fn case_and_cast_config() {
    check(
        &["select case a when 1 then 'one' else 'many' end, cast(b as numeric(10, 2))"],
        &json!({
            "type": "select",
            "columns": [
                {
                    "expr": {
                        "type": "case",
                        "value": { "type": "ref", "name": "a" },
                        "whens": [{
                            "when": { "type": "integer", "value": 1 },
                            "value": { "type": "string", "value": "one" },
                        }],
                        "else": { "type": "string", "value": "many" },
                    },
                },
                {
                    "expr": {
                        "type": "cast",
                        "operand": { "type": "ref", "name": "b" },
                        "to": { "type": "numeric", "config": [10, 2] },
                    },
                },
            ],
        }),
    );
}
