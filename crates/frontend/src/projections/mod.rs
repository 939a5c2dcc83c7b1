pub mod p900_plan_fact;
