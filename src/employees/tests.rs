use crate::employees::{total_pages, Employee, NewEmployee, DEFAULT_PAGE_LIMIT};

#[test]
fn employee_json_shape() {
    let employee: Employee = serde_json::from_str(
        r#"{"id":"1","name":"Ann","image":"https://img.example.com/ann.png","age":30,"salary":"1250.50"}"#,
    )
    .unwrap();

    assert_eq!(employee.age, 30);
    assert_eq!(employee.salary, "1250.50");
}

#[test]
fn new_employee_serializes_without_id() {
    let new_employee = NewEmployee {
        name: "Ann".to_string(),
        image: "https://img.example.com/ann.png".to_string(),
        age: 30,
        salary: "1000".to_string(),
    };

    let json = serde_json::to_value(&new_employee).unwrap();
    assert!(json.get("id").is_none());

    let employee = new_employee.with_id("7");
    assert_eq!(employee.id, "7");
    assert_eq!(employee.name, "Ann");
}

#[test]
fn pages_round_up() {
    assert_eq!(total_pages(0, DEFAULT_PAGE_LIMIT), 0);
    assert_eq!(total_pages(1, DEFAULT_PAGE_LIMIT), 1);
    assert_eq!(total_pages(10, DEFAULT_PAGE_LIMIT), 1);
    assert_eq!(total_pages(11, DEFAULT_PAGE_LIMIT), 2);
    assert_eq!(total_pages(5, 0), 0);
}

#[test]
fn pages_near_usize_max() {
    assert_eq!(total_pages(usize::MAX, 10), usize::MAX / 10 + 1);
    assert_eq!(total_pages(usize::MAX, 1), usize::MAX);
}
